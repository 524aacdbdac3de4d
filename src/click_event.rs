use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClickEvent {
  pub(crate) handled: bool,
  pub(crate) target: NodeId,
}

impl ClickEvent {
  pub(crate) fn new(target: NodeId) -> Self {
    Self {
      handled: false,
      target,
    }
  }
}
