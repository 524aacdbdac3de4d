use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Element {
  pub(crate) attributes: BTreeMap<String, String>,
  pub(crate) classes: Vec<String>,
  pub(crate) tag: String,
}

impl Element {
  pub(crate) fn has_class(&self, class: &str) -> bool {
    self.classes.iter().any(|candidate| candidate == class)
  }

  pub(crate) fn new(tag: &str) -> Self {
    Self {
      attributes: BTreeMap::new(),
      classes: Vec::new(),
      tag: tag.to_ascii_lowercase(),
    }
  }
}
