use super::*;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("could not decode response from {url}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },
  #[error("request to {url} failed")]
  Request {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("{url} responded with {status}")]
  Status { status: StatusCode, url: String },
}
