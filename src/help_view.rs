use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::help_area(frame.area());

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  fn help_area(area: Rect) -> Rect {
    let (line_count, max_line_width) = HELP_TEXT
      .lines()
      .fold((0usize, 0usize), |(count, width), line| {
        (count + 1, width.max(line.chars().count()))
      });

    let desired_width = u16::try_from(max_line_width + 4).unwrap_or(u16::MAX);
    let desired_height = u16::try_from(line_count + 2).unwrap_or(u16::MAX);

    let width = desired_width.min(area.width);
    let height = desired_height.min(area.height);

    Rect::new(
      area.x + (area.width - width) / 2,
      area.y + (area.height - height) / 2,
      width,
      height,
    )
  }

  pub(crate) fn hide(&mut self, message: &mut String, fallback: &str) {
    if !self.visible {
      return;
    }

    *message = self
      .message_backup
      .take()
      .unwrap_or_else(|| fallback.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(std::mem::replace(message, HELP_STATUS.into()));

    self.visible = true;
  }
}
