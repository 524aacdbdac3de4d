use super::*;

pub(crate) struct State {
  focus: Focus,
  focused_button: Option<NodeId>,
  help: HelpView,
  message: String,
  page: Page,
  pending_effects: Vec<Effect>,
  scroll: usize,
  transient_message: Option<TransientMessage>,
  viewport_height: usize,
  viewport_width: usize,
}

impl State {
  fn buttons(&self) -> Vec<NodeId> {
    let document = self.page.document();
    document.query_selector_all(self.page.main(), "button")
  }

  fn click_focused(&mut self) {
    let Some(button) = self.focused_button else {
      return;
    };

    match self.page.click(button) {
      Some(Outcome::Found(toggle)) => {
        if let Outcome::Found(section) = toggle.section {
          let document = self.page.document();

          if !document.has_class(section, "hide")
            && document.children(section).is_empty()
          {
            self.set_transient_message("No comments on this post".into());
          }
        }
      }
      Some(outcome) => {
        tracing::warn!(?outcome, "comment toggle did not complete");
      }
      None => tracing::debug!(?button, "no listener bound to button"),
    }

    self.reveal_focused();
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.hide_help(),
      Command::SwitchFocus => self.switch_focus(),
      Command::NextEmployee => self.step_employee(true),
      Command::PreviousEmployee => self.step_employee(false),
      Command::LoadEmployee => self.load_employee(),
      Command::NextButton => self.step_button(true),
      Command::PreviousButton => self.step_button(false),
      Command::FirstButton => self.focus_button_at(0),
      Command::LastButton => {
        let count = self.buttons().len();
        self.focus_button_at(count.saturating_sub(1));
      }
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::ClickButton => self.click_focused(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn focus(&self) -> Focus {
    self.focus
  }

  fn focus_button_at(&mut self, index: usize) {
    let Some(button) = self.buttons().get(index).copied() else {
      return;
    };

    self.focused_button = Some(button);
    self.reveal_focused();
  }

  #[cfg(test)]
  pub(crate) fn focused_button(&self) -> Option<NodeId> {
    self.focused_button
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Posts { bundles, ticket } => {
        let aborted = bundles.is_none();

        let name = self.page.user(ticket.user_id).map_or_else(
          || format!("employee {}", ticket.user_id),
          |user| user.name.clone(),
        );

        let Some(summary) = self.page.finish_change(ticket, bundles) else {
          if aborted && !self.page.is_loading() {
            self.restore_status();
            self.set_transient_message(
              "Posts are unavailable right now".into(),
            );
          }

          return;
        };

        self.focused_button = summary.added.first().copied();
        self.scroll = 0;

        self.restore_status();

        self.set_transient_message(match summary.posts {
          0 => format!("No posts found for {name}"),
          1 => format!("Loaded 1 post for {name}"),
          count => format!("Loaded {count} posts for {name}"),
        });
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn hide_help(&mut self) {
    let status = self.idle_status();

    self.help.hide(&mut self.message, status);

    if self.message == LOADING_POSTS_STATUS && !self.page.is_loading() {
      self.message = status.into();
    }
  }

  fn idle_status(&self) -> &'static str {
    if self.page.is_loading() {
      LOADING_POSTS_STATUS
    } else {
      self.focus.status()
    }
  }

  fn load_employee(&mut self) {
    let value = self.page.select_value();

    let Some(ticket) = self.page.begin_change(value.as_deref()) else {
      self.set_transient_message("Still loading posts".into());
      return;
    };

    self.pending_effects.push(Effect::FetchPosts { ticket });

    self.restore_status();
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(page: Page) -> Self {
    Self {
      focus: Focus::Menu,
      focused_button: None,
      help: HelpView::new(),
      message: MENU_STATUS.into(),
      page,
      pending_effects: Vec::new(),
      scroll: 0,
      transient_message: None,
      viewport_height: 0,
      viewport_width: 80,
    }
  }

  pub(crate) fn outline(&self) -> Outline {
    Outline::new(
      self.page.document(),
      self.page.main(),
      self.focused_button,
      self.viewport_width,
    )
  }

  pub(crate) fn page(&self) -> &Page {
    &self.page
  }

  fn page_down(&mut self) {
    let outline = self.outline();

    let max_scroll = outline.lines.len().saturating_sub(self.page_jump());

    self.scroll = (self.scroll + self.page_jump()).min(max_scroll);

    if let Some((button, _)) =
      outline.buttons.iter().find(|(_, line)| *line >= self.scroll)
    {
      self.focused_button = Some(*button);
    }
  }

  fn page_jump(&self) -> usize {
    self.viewport_height.max(1)
  }

  fn page_up(&mut self) {
    let outline = self.outline();

    self.scroll = self.scroll.saturating_sub(self.page_jump());

    let bottom = self.scroll + self.page_jump();

    if let Some((button, _)) = outline
      .buttons
      .iter()
      .rev()
      .find(|(_, line)| *line < bottom)
    {
      self.focused_button = Some(*button);
    }
  }

  fn restore_status(&mut self) {
    if !self.help.is_visible() {
      self.message = self.idle_status().into();
      self.transient_message = None;
    }
  }

  /// Scrolls just far enough to bring the focused button into view.
  fn reveal_focused(&mut self) {
    let Some(line) = self
      .focused_button
      .and_then(|button| self.outline().button_line(button))
    else {
      return;
    };

    let height = self.page_jump();

    if line < self.scroll {
      self.scroll = line;
    } else if line >= self.scroll + height {
      self.scroll = line + 1 - height;
    }
  }

  pub(crate) fn scroll(&self) -> usize {
    self.scroll
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let restore = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.restore().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), restore, Instant::now()));

    self.message = message;
  }

  pub(crate) fn set_viewport(&mut self, height: usize, width: usize) {
    self.viewport_height = height;
    self.viewport_width = width;
  }

  fn step_button(&mut self, forward: bool) {
    let buttons = self.buttons();

    let Some(last) = buttons.len().checked_sub(1) else {
      return;
    };

    let index = match self
      .focused_button
      .and_then(|focused| buttons.iter().position(|button| *button == focused))
    {
      Some(index) if forward => (index + 1).min(last),
      Some(index) => index.saturating_sub(1),
      None => 0,
    };

    self.focus_button_at(index);
  }

  fn step_employee(&mut self, forward: bool) {
    let count = self
      .page
      .document()
      .query_selector_all(self.page.select_menu(), "option")
      .len();

    if count == 0 {
      return;
    }

    let current = self.page.selected_index();

    let index = if forward {
      (current + 1) % count
    } else {
      (current + count - 1) % count
    };

    if self.page.select_option(index).is_none() {
      self.set_transient_message("Wait for the current posts to load".into());
    }
  }

  fn switch_focus(&mut self) {
    self.focus = self.focus.toggled();

    if self.focus == Focus::Posts && self.focused_button.is_none() {
      self.focused_button = self.buttons().first().copied();
    }

    self.restore_status();
  }

  pub(crate) fn update_transient_message(&mut self, now: Instant) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired(now) {
        self.message = transient.restore().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::fake_source::{comment_json, post_json, user_json},
  };

  fn source() -> FakeSource {
    FakeSource::with_records(
      &[user_json(1, "Leanne"), user_json(2, "Ervin"), user_json(3, "Clementine")],
      &[post_json(1, 1), post_json(1, 2), post_json(1, 3), post_json(3, 21)],
      &[comment_json(1, 1), comment_json(1, 2)],
    )
  }

  async fn state() -> (State, FakeSource) {
    let source = source();

    let mut page = Page::new();
    page.init_page(&source).await;

    (State::new(page), source)
  }

  fn ticket(dispatch: &CommandDispatch) -> ChangeTicket {
    match dispatch.effects.as_slice() {
      [Effect::FetchPosts { ticket }] => *ticket,
      effects => panic!("unexpected effects: {effects:?}"),
    }
  }

  async fn loaded(index: usize) -> (State, FakeSource) {
    let (mut state, source) = state().await;

    for _ in 0..index {
      state.dispatch_command(Command::NextEmployee);
    }

    let ticket = ticket(&state.dispatch_command(Command::LoadEmployee));

    let bundles = load_posts(&source, ticket.user_id).await;

    state.handle_event(Event::Posts {
      bundles: Some(bundles),
      ticket,
    });

    (state, source)
  }

  #[tokio::test]
  async fn loading_an_employee_emits_a_fetch_effect() {
    let (mut state, _) = state().await;

    state.dispatch_command(Command::NextEmployee);
    state.dispatch_command(Command::NextEmployee);

    assert_eq!(state.page().selected_label(), "Ervin");

    let dispatch = state.dispatch_command(Command::LoadEmployee);

    assert!(!dispatch.should_exit);
    assert_eq!(ticket(&dispatch).user_id, 2);
    assert_eq!(state.message(), LOADING_POSTS_STATUS);
    assert!(state.page().is_loading());

    let again = state.dispatch_command(Command::LoadEmployee);

    assert!(again.effects.is_empty());
    assert_eq!(state.message(), "Still loading posts");
  }

  #[tokio::test]
  async fn sentinel_selection_loads_the_first_employee() {
    let (mut state, _) = state().await;

    let dispatch = state.dispatch_command(Command::LoadEmployee);

    assert_eq!(ticket(&dispatch).user_id, 1);
  }

  #[tokio::test]
  async fn dropdown_is_locked_while_loading() {
    let (mut state, _) = state().await;

    state.dispatch_command(Command::LoadEmployee);
    state.dispatch_command(Command::NextEmployee);

    assert_eq!(state.page().selected_index(), 0);
    assert_eq!(state.message(), "Wait for the current posts to load");
  }

  #[tokio::test]
  async fn previous_employee_wraps_to_the_last_option() {
    let (mut state, _) = state().await;

    state.dispatch_command(Command::PreviousEmployee);

    assert_eq!(state.page().selected_label(), "Clementine");

    state.dispatch_command(Command::NextEmployee);

    assert_eq!(state.page().selected_label(), EMPLOYEES_OPTION);
  }

  #[tokio::test]
  async fn posts_event_renders_and_reports() {
    let (state, _) = loaded(1).await;

    assert!(!state.page().is_loading());
    assert!(!state.page().document().is_disabled(state.page().select_menu()));
    assert_eq!(state.message(), "Loaded 3 posts for Leanne");
    assert_eq!(state.focused_button(), state.buttons().first().copied());
    assert_eq!(state.buttons().len(), 3);
  }

  #[tokio::test]
  async fn empty_posts_are_reported_neutrally() {
    let (state, _) = loaded(2).await;

    assert_eq!(state.message(), "No posts found for Ervin");
    assert_eq!(state.focused_button(), None);
  }

  #[tokio::test]
  async fn aborted_load_releases_the_dropdown() {
    let (mut state, _) = state().await;

    let ticket = ticket(&state.dispatch_command(Command::LoadEmployee));

    state.handle_event(Event::Posts {
      bundles: None,
      ticket,
    });

    assert!(!state.page().is_loading());
    assert_eq!(state.message(), "Posts are unavailable right now");

    state.update_transient_message(Instant::now() + Duration::from_secs(5));

    assert_eq!(state.message(), MENU_STATUS);
  }

  #[tokio::test]
  async fn stale_reply_is_ignored() {
    let (mut state, _) = state().await;

    let stale = ChangeTicket {
      request_id: 42,
      user_id: 1,
    };

    state.handle_event(Event::Posts {
      bundles: Some(Vec::new()),
      ticket: stale,
    });

    assert_eq!(state.message(), MENU_STATUS);
    assert_eq!(state.page().document().children(state.page().main()).len(), 1);
  }

  #[tokio::test]
  async fn button_navigation_stays_in_bounds() {
    let (mut state, _) = loaded(1).await;

    let buttons = state.buttons();

    state.dispatch_command(Command::SwitchFocus);
    assert_eq!(state.focus(), Focus::Posts);
    assert_eq!(state.message(), POSTS_STATUS);

    state.dispatch_command(Command::PreviousButton);
    assert_eq!(state.focused_button(), Some(buttons[0]));

    state.dispatch_command(Command::NextButton);
    state.dispatch_command(Command::NextButton);
    state.dispatch_command(Command::NextButton);
    assert_eq!(state.focused_button(), Some(buttons[2]));

    state.dispatch_command(Command::FirstButton);
    assert_eq!(state.focused_button(), Some(buttons[0]));

    state.dispatch_command(Command::LastButton);
    assert_eq!(state.focused_button(), Some(buttons[2]));
  }

  #[tokio::test]
  async fn clicking_toggles_the_focused_button() {
    let (mut state, _) = loaded(1).await;

    state.dispatch_command(Command::ClickButton);

    let button = state.focused_button().unwrap();

    assert_eq!(state.page().document().text_content(button), HIDE_COMMENTS);

    let painted = state
      .outline()
      .lines
      .iter()
      .map(|line| {
        line
          .spans
          .iter()
          .map(|span| span.content.as_ref())
          .collect::<String>()
      })
      .collect::<Vec<_>>();

    assert!(painted.iter().any(|line| line.trim() == "comment 1"));

    state.dispatch_command(Command::NextButton);
    state.dispatch_command(Command::ClickButton);

    assert_eq!(state.message(), "No comments on this post");
  }

  #[tokio::test]
  async fn focus_moves_keep_the_button_visible() {
    let (mut state, _) = loaded(1).await;

    state.set_viewport(4, 80);

    state.dispatch_command(Command::LastButton);

    let line = state
      .outline()
      .button_line(state.focused_button().unwrap())
      .unwrap();

    assert!(line >= state.scroll());
    assert!(line < state.scroll() + 4);

    state.dispatch_command(Command::FirstButton);

    assert_eq!(state.scroll(), 5);
  }

  #[tokio::test]
  async fn paging_moves_the_focus_with_the_view() {
    let (mut state, _) = loaded(1).await;

    let buttons = state.buttons();

    state.set_viewport(7, 80);

    state.dispatch_command(Command::PageDown);
    assert_eq!(state.scroll(), 7);
    assert_eq!(state.focused_button(), Some(buttons[1]));

    state.dispatch_command(Command::PageUp);
    assert_eq!(state.scroll(), 0);
    assert_eq!(state.focused_button(), Some(buttons[0]));
  }

  #[tokio::test]
  async fn help_restores_the_previous_status() {
    let (mut state, _) = state().await;

    state.dispatch_command(Command::ShowHelp);
    assert!(state.help_is_visible());
    assert_eq!(state.message(), HELP_STATUS);

    state.dispatch_command(Command::HideHelp);
    assert!(!state.help_is_visible());
    assert_eq!(state.message(), MENU_STATUS);
  }

  #[tokio::test]
  async fn quit_requests_exit() {
    let (mut state, _) = state().await;

    assert!(state.dispatch_command(Command::Quit).should_exit);
  }
}
