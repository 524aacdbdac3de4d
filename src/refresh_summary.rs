use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RefreshSummary {
  pub(crate) added: Vec<NodeId>,
  pub(crate) posts: usize,
  pub(crate) removed: Vec<NodeId>,
}
