use super::*;

#[derive(Debug)]
pub(crate) enum Event {
  /// `bundles` is `None` when the load task ended without producing posts.
  Posts {
    bundles: Option<Vec<PostBundle>>,
    ticket: ChangeTicket,
  },
}
