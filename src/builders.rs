use super::*;

pub(crate) fn build_comments_fragment(
  document: &mut Document,
  comments: Option<&[Comment]>,
) -> Outcome<NodeId> {
  let Some(comments) = comments else {
    return Outcome::Invalid;
  };

  let fragment = document.create_fragment();

  for comment in comments {
    let article = document.create_element("article");

    for child in [
      build_element(document, "h3", &comment.name, None),
      build_element(document, "p", &comment.body, None),
      build_element(document, "p", &format!("From: {}", comment.email), None),
    ] {
      document.append_child(article, child);
    }

    document.append_child(fragment, article);
  }

  Outcome::Found(fragment)
}

/// Creates a detached `tag` element holding `text`. An empty `class_name` is
/// treated as no class at all.
pub(crate) fn build_element(
  document: &mut Document,
  tag: &str,
  text: &str,
  class_name: Option<&str>,
) -> NodeId {
  let element = document.create_element(tag);

  document.set_text_content(element, text);

  if let Some(class_name) = class_name.filter(|name| !name.is_empty()) {
    document.set_class_name(element, class_name);
  }

  element
}

pub(crate) fn build_options_from_users(
  document: &mut Document,
  users: Option<&[User]>,
) -> Outcome<Vec<NodeId>> {
  let Some(users) = users else {
    return Outcome::Invalid;
  };

  Outcome::Found(
    users
      .iter()
      .map(|user| {
        let option = build_element(document, "option", &user.name, None);
        document.set_attribute(option, "value", &user.id.to_string());
        option
      })
      .collect(),
  )
}
