use super::*;

/// Where JSON resources come from. Paths are relative to the API root,
/// e.g. `/posts?userId=3`.
pub(crate) trait Source {
  async fn fetch(&self, path: &str) -> Result<Value, FetchError>;

  async fn fetch_as<T: DeserializeOwned>(
    &self,
    path: &str,
  ) -> Result<T, FetchError> {
    let value = self.fetch(path).await?;

    serde_json::from_value(value).map_err(|source| FetchError::Decode {
      url: path.to_string(),
      source,
    })
  }
}
