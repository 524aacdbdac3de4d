use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  pub(crate) body: String,
  pub(crate) email: String,
  pub(crate) name: String,
  pub(crate) post_id: u64,
}
