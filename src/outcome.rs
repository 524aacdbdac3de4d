/// The result of an operation that can be handed a bad argument, can fail to
/// find its target, or can succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome<T> {
  Found(T),
  Invalid,
  Missing,
}

impl<T> Outcome<T> {
  pub(crate) fn found(self) -> Option<T> {
    match self {
      Self::Found(value) => Some(value),
      Self::Invalid | Self::Missing => None,
    }
  }

  pub(crate) fn is_found(&self) -> bool {
    matches!(self, Self::Found(_))
  }

  pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
    match self {
      Self::Found(value) => Outcome::Found(f(value)),
      Self::Invalid => Outcome::Invalid,
      Self::Missing => Outcome::Missing,
    }
  }
}

impl<T> From<Option<T>> for Outcome<T> {
  fn from(value: Option<T>) -> Self {
    value.map_or(Self::Missing, Self::Found)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn option_converts_to_found_or_missing() {
    assert_eq!(Outcome::from(Some(3)), Outcome::Found(3));
    assert_eq!(Outcome::<u8>::from(None), Outcome::Missing);
  }

  #[test]
  fn map_keeps_failure_kind() {
    assert_eq!(Outcome::Found(2).map(|n| n * 2), Outcome::Found(4));
    assert_eq!(Outcome::<u8>::Invalid.map(|n| n * 2), Outcome::Invalid);
    assert_eq!(Outcome::<u8>::Missing.map(|n| n * 2), Outcome::Missing);
  }

  #[test]
  fn found_drops_failure_kind() {
    assert_eq!(Outcome::Found("x").found(), Some("x"));
    assert_eq!(Outcome::<&str>::Invalid.found(), None);
    assert!(!Outcome::<&str>::Missing.is_found());
  }
}
