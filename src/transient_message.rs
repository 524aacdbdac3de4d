use super::*;

/// A status line message that gives way to `restore` once it expires.
#[derive(Clone, Debug)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  restore: String,
  text: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String, restore: String, now: Instant) -> Self {
    Self {
      expires_at: now + Self::LIFETIME,
      restore,
      text,
    }
  }

  pub(crate) fn restore(&self) -> &str {
    &self.restore
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}
