use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self
      .state
      .set_viewport(layout[1].height as usize, layout[1].width as usize);

    frame.render_widget(self.header(), layout[0]);

    let outline = self.state.outline();

    let scroll = u16::try_from(self.state.scroll()).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(outline.lines).scroll((scroll, 0)), layout[1]);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPosts { ticket } => {
        let client = self.client.clone();

        let reply = PostsReply::new(self.event_tx.clone(), ticket);

        self.handle.spawn(async move {
          reply.deliver(load_posts(&client, ticket.user_id).await);
        });
      }
    }
  }

  fn header(&self) -> Paragraph<'static> {
    let page = self.state.page();

    let menu_style = if self.state.focus() == Focus::Menu {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::White)
    };

    let mut spans = vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        "EMPLOYEE POSTS",
        Style::default().add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(
        format!("< {} >", truncate(&page.selected_label(), 40)),
        menu_style,
      ),
    ];

    if page.document().is_disabled(page.select_menu()) {
      spans.push(Span::styled(
        "  loading...",
        Style::default().fg(Color::DarkGray),
      ));
    }

    Paragraph::new(Line::from(spans))
  }

  pub(crate) fn new(client: Client, page: Page) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(page),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message(Instant::now());

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else {
        self.state.focus().handle_key(key)
      };

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }
}
