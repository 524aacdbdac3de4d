use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) log_file: PathBuf,
  pub(crate) log_filter: String,
}

impl Config {
  const API_URL_VAR: &str = "POSTS_API_URL";

  const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

  const DEFAULT_LOG_FILTER: &str = "info";

  const LOG_FILE_VAR: &str = "POSTS_LOG_FILE";

  const LOG_FILTER_VAR: &str = "POSTS_LOG";

  fn default_log_file(
    state_home: Option<PathBuf>,
    home: Option<PathBuf>,
    current_dir: PathBuf,
  ) -> PathBuf {
    let base_dir = state_home
      .or_else(|| home.map(|home| home.join(".local").join("state")))
      .unwrap_or_else(|| current_dir.join(".local").join("state"));

    base_dir.join("posts").join("posts.log")
  }

  pub(crate) fn load() -> Result<Self> {
    let api_url = env::var(Self::API_URL_VAR)
      .ok()
      .filter(|url| !url.trim().is_empty())
      .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string())
      .trim()
      .trim_end_matches('/')
      .to_string();

    let log_file = match env::var_os(Self::LOG_FILE_VAR) {
      Some(path) => PathBuf::from(path),
      None => Self::default_log_file(
        env::var_os("XDG_STATE_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
        env::current_dir().context("could not determine working directory")?,
      ),
    };

    let log_filter = env::var(Self::LOG_FILTER_VAR)
      .unwrap_or_else(|_| Self::DEFAULT_LOG_FILTER.to_string());

    Ok(Self {
      api_url,
      log_file,
      log_filter,
    })
  }
}
