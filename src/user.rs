use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct User {
  pub(crate) company: Company,
  pub(crate) id: u64,
  pub(crate) name: String,
}
