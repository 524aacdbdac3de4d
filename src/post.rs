use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Post {
  pub(crate) body: String,
  pub(crate) id: u64,
  pub(crate) title: String,
  pub(crate) user_id: u64,
}
