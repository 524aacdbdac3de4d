use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }
}

impl Source for Client {
  async fn fetch(&self, path: &str) -> Result<Value, FetchError> {
    let url = self.url(path);

    let response = self.client.get(&url).send().await.map_err(|source| {
      FetchError::Request {
        url: url.clone(),
        source,
      }
    })?;

    let status = response.status();

    if !status.is_success() {
      return Err(FetchError::Status { status, url });
    }

    let body = response
      .bytes()
      .await
      .map_err(|source| FetchError::Request {
        url: url.clone(),
        source,
      })?;

    serde_json::from_slice(&body)
      .map_err(|source| FetchError::Decode { url, source })
  }
}
