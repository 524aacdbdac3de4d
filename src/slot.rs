use super::*;

/// One arena cell. `generation` is bumped each time the cell is freed.
#[derive(Clone, Debug, Default)]
pub(crate) struct Slot {
  pub(crate) generation: u32,
  pub(crate) node: Option<Node>,
}
