use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchPosts { ticket: ChangeTicket },
}
