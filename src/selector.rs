use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SelectorError {
  #[error("selector is empty")]
  Empty,
  #[error("expected a name at position {position}")]
  ExpectedName { position: usize },
  #[error("unexpected `{character}` at position {position}")]
  Unexpected { character: char, position: usize },
  #[error("unterminated attribute selector")]
  Unterminated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Compound {
  pub(crate) attributes: Vec<(String, Option<String>)>,
  pub(crate) classes: Vec<String>,
  pub(crate) id: Option<String>,
  pub(crate) tag: Option<String>,
}

impl Compound {
  pub(crate) fn matches(&self, element: &Element) -> bool {
    if let Some(tag) = &self.tag
      && *tag != element.tag
    {
      return false;
    }

    if let Some(id) = &self.id
      && element.attributes.get("id") != Some(id)
    {
      return false;
    }

    if !self.classes.iter().all(|class| element.has_class(class)) {
      return false;
    }

    self
      .attributes
      .iter()
      .all(|(name, expected)| match (element.attributes.get(name), expected) {
        (Some(actual), Some(expected)) => actual == expected,
        (Some(_), None) => true,
        (None, _) => false,
      })
  }
}

/// A whitespace-separated chain of compound selectors, each one a descendant
/// of the previous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Selector {
  pub(crate) compounds: Vec<Compound>,
}

impl Selector {
  fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
  }

  pub(crate) fn parse(input: &str) -> Result<Self, SelectorError> {
    let chars = input.chars().collect::<Vec<char>>();

    let mut compounds = Vec::new();
    let mut position = 0;

    while position < chars.len() {
      if chars[position].is_whitespace() {
        position += 1;
        continue;
      }

      let (compound, next) = Self::parse_compound(&chars, position)?;

      compounds.push(compound);
      position = next;
    }

    if compounds.is_empty() {
      return Err(SelectorError::Empty);
    }

    Ok(Self { compounds })
  }

  fn parse_attribute(
    chars: &[char],
    start: usize,
  ) -> Result<((String, Option<String>), usize), SelectorError> {
    let (name, mut position) = Self::read_name(chars, start)?;

    match chars.get(position) {
      Some(']') => return Ok(((name, None), position + 1)),
      Some('=') => position += 1,
      Some(&character) => {
        return Err(SelectorError::Unexpected {
          character,
          position,
        });
      }
      None => return Err(SelectorError::Unterminated),
    }

    let mut value = String::new();

    match chars.get(position) {
      Some(&quote) if quote == '"' || quote == '\'' => {
        position += 1;

        loop {
          match chars.get(position) {
            Some(&ch) if ch == quote => {
              position += 1;
              break;
            }
            Some(&ch) => {
              value.push(ch);
              position += 1;
            }
            None => return Err(SelectorError::Unterminated),
          }
        }
      }
      _ => {
        while let Some(&ch) = chars.get(position) {
          if ch == ']' {
            break;
          }

          value.push(ch);
          position += 1;
        }
      }
    }

    match chars.get(position) {
      Some(']') => Ok(((name, Some(value)), position + 1)),
      Some(&character) => Err(SelectorError::Unexpected {
        character,
        position,
      }),
      None => Err(SelectorError::Unterminated),
    }
  }

  fn parse_compound(
    chars: &[char],
    start: usize,
  ) -> Result<(Compound, usize), SelectorError> {
    let mut compound = Compound::default();
    let mut position = start;

    if chars.get(position).copied().is_some_and(Self::is_name_char) {
      let (tag, next) = Self::read_name(chars, position)?;
      compound.tag = Some(tag.to_ascii_lowercase());
      position = next;
    }

    while let Some(&ch) = chars.get(position) {
      match ch {
        '#' => {
          let (id, next) = Self::read_name(chars, position + 1)?;
          compound.id = Some(id);
          position = next;
        }
        '.' => {
          let (class, next) = Self::read_name(chars, position + 1)?;
          compound.classes.push(class);
          position = next;
        }
        '[' => {
          let (attribute, next) = Self::parse_attribute(chars, position + 1)?;
          compound.attributes.push(attribute);
          position = next;
        }
        _ if ch.is_whitespace() => break,
        character => {
          return Err(SelectorError::Unexpected {
            character,
            position,
          });
        }
      }
    }

    Ok((compound, position))
  }

  fn read_name(
    chars: &[char],
    start: usize,
  ) -> Result<(String, usize), SelectorError> {
    let name = chars[start.min(chars.len())..]
      .iter()
      .take_while(|ch| Self::is_name_char(**ch))
      .collect::<String>();

    if name.is_empty() {
      return Err(SelectorError::ExpectedName { position: start });
    }

    let end = start + name.chars().count();

    Ok((name, end))
  }
}
