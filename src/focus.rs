use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
  Menu,
  Posts,
}

impl Focus {
  pub(crate) fn handle_key(self, key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match (self, key.code) {
      (_, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Command::Quit,
      (_, KeyCode::Char('?')) => Command::ShowHelp,
      (_, KeyCode::Tab | KeyCode::BackTab) => Command::SwitchFocus,
      (Focus::Menu, KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k')) => {
        Command::PreviousEmployee
      }
      (
        Focus::Menu,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j'),
      ) => Command::NextEmployee,
      (Focus::Menu, KeyCode::Enter) => Command::LoadEmployee,
      (Focus::Posts, KeyCode::Down | KeyCode::Char('j')) => Command::NextButton,
      (Focus::Posts, KeyCode::Up | KeyCode::Char('k')) => {
        Command::PreviousButton
      }
      (Focus::Posts, KeyCode::PageDown) => Command::PageDown,
      (Focus::Posts, KeyCode::PageUp) => Command::PageUp,
      (Focus::Posts, KeyCode::Char('d'))
        if modifiers.contains(KeyModifiers::CONTROL) =>
      {
        Command::PageDown
      }
      (Focus::Posts, KeyCode::Char('u'))
        if modifiers.contains(KeyModifiers::CONTROL) =>
      {
        Command::PageUp
      }
      (Focus::Posts, KeyCode::Home) => Command::FirstButton,
      (Focus::Posts, KeyCode::End) => Command::LastButton,
      (Focus::Posts, KeyCode::Enter | KeyCode::Char(' ')) => {
        Command::ClickButton
      }
      _ => Command::None,
    }
  }

  pub(crate) fn status(self) -> &'static str {
    match self {
      Focus::Menu => MENU_STATUS,
      Focus::Posts => POSTS_STATUS,
    }
  }

  pub(crate) fn toggled(self) -> Self {
    match self {
      Focus::Menu => Focus::Posts,
      Focus::Posts => Focus::Menu,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn menu_keys_pick_and_load_employees() {
    assert_eq!(
      Focus::Menu.handle_key(press(KeyCode::Right)),
      Command::NextEmployee
    );
    assert_eq!(
      Focus::Menu.handle_key(press(KeyCode::Char('h'))),
      Command::PreviousEmployee
    );
    assert_eq!(
      Focus::Menu.handle_key(press(KeyCode::Enter)),
      Command::LoadEmployee
    );
  }

  #[test]
  fn post_keys_move_between_buttons() {
    assert_eq!(
      Focus::Posts.handle_key(press(KeyCode::Char('j'))),
      Command::NextButton
    );
    assert_eq!(
      Focus::Posts.handle_key(press(KeyCode::Char(' '))),
      Command::ClickButton
    );
    assert_eq!(
      Focus::Posts.handle_key(KeyEvent::new(
        KeyCode::Char('d'),
        KeyModifiers::CONTROL
      )),
      Command::PageDown
    );
    assert_eq!(
      Focus::Posts.handle_key(press(KeyCode::Char('d'))),
      Command::None
    );
  }

  #[test]
  fn global_keys_work_in_either_focus() {
    for focus in [Focus::Menu, Focus::Posts] {
      assert_eq!(focus.handle_key(press(KeyCode::Esc)), Command::Quit);
      assert_eq!(focus.handle_key(press(KeyCode::Char('?'))), Command::ShowHelp);
      assert_eq!(focus.handle_key(press(KeyCode::Tab)), Command::SwitchFocus);
      assert_eq!(focus.toggled().toggled(), focus);
    }
  }
}
