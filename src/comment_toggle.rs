use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentToggle {
  pub(crate) button: Outcome<NodeId>,
  pub(crate) section: Outcome<NodeId>,
}
