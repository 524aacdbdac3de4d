/// An employee change that has disabled the dropdown and is waiting for its
/// posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub(crate) struct ChangeTicket {
  pub(crate) request_id: u64,
  pub(crate) user_id: u64,
}
