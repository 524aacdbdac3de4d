use super::*;

pub(crate) const HIDE_COMMENTS: &str = "Hide Comments";
pub(crate) const SHOW_COMMENTS: &str = "Show Comments";

fn find_by_post(document: &Document, tag: &str, post_id: u64) -> Option<NodeId> {
  document.query_selector(
    document.root(),
    &format!(r#"{tag}[data-post-id="{post_id}"]"#),
  )
}

pub(crate) fn toggle_button_label(
  document: &mut Document,
  post_id: u64,
) -> Outcome<NodeId> {
  if post_id == 0 {
    return Outcome::Invalid;
  }

  let Some(button) = find_by_post(document, "button", post_id) else {
    return Outcome::Missing;
  };

  let label = if document.text_content(button) == SHOW_COMMENTS {
    HIDE_COMMENTS
  } else {
    SHOW_COMMENTS
  };

  document.set_text_content(button, label);

  Outcome::Found(button)
}

/// Click handler for a post's comment button. Flips the section and the
/// button label together so that a hidden section always pairs with
/// "Show Comments".
pub(crate) fn toggle_comments(
  document: &mut Document,
  event: Option<&mut ClickEvent>,
  post_id: u64,
) -> Outcome<CommentToggle> {
  let Some(event) = event else {
    return Outcome::Invalid;
  };

  if post_id == 0 {
    return Outcome::Invalid;
  }

  event.handled = true;

  Outcome::Found(CommentToggle {
    section: toggle_section(document, post_id),
    button: toggle_button_label(document, post_id),
  })
}

pub(crate) fn toggle_section(
  document: &mut Document,
  post_id: u64,
) -> Outcome<NodeId> {
  if post_id == 0 {
    return Outcome::Invalid;
  }

  Outcome::from(find_by_post(document, "section", post_id)).map(|section| {
    document.toggle_class(section, "hide");
    section
  })
}
