#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  ClickButton,
  FirstButton,
  HideHelp,
  LastButton,
  LoadEmployee,
  NextButton,
  NextEmployee,
  None,
  PageDown,
  PageUp,
  PreviousButton,
  PreviousEmployee,
  Quit,
  ShowHelp,
  SwitchFocus,
}
