use super::*;

/// A post with everything its article needs, fetched ahead of rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PostBundle {
  pub(crate) author: Outcome<User>,
  pub(crate) comments: Vec<Comment>,
  pub(crate) post: Post,
}
