/// A handle into a `Document`. The generation changes whenever a slot is
/// reused, so a handle to a freed node never resolves to its successor.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct NodeId {
  pub(crate) generation: u32,
  pub(crate) index: usize,
}
