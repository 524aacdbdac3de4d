use super::*;

/// Click bindings for the comment buttons under `<main>`, keyed by the
/// button's node identity so a binding can be removed exactly as added.
#[derive(Debug, Default)]
pub(crate) struct ListenerRegistry {
  bound: BTreeMap<NodeId, u64>,
}

impl ListenerRegistry {
  const BUTTONS: &str = "main button";

  pub(crate) fn add_button_listeners(&mut self, document: &Document) -> Vec<NodeId> {
    let buttons = document.query_selector_all(document.root(), Self::BUTTONS);

    for &button in &buttons {
      let post_id = document
        .dataset(button, "postId")
        .and_then(|id| id.parse::<u64>().ok())
        .filter(|id| *id != 0);

      if let Some(post_id) = post_id {
        self.bound.entry(button).or_insert(post_id);
      }
    }

    buttons
  }

  pub(crate) fn binding(&self, button: NodeId) -> Option<u64> {
    self.bound.get(&button).copied()
  }

  /// Runs the bound handler for the event target, or returns `None` when
  /// nothing is listening on it.
  pub(crate) fn dispatch_click(
    &self,
    document: &mut Document,
    event: &mut ClickEvent,
  ) -> Option<Outcome<CommentToggle>> {
    let post_id = self.binding(event.target)?;

    Some(toggle_comments(document, Some(event), post_id))
  }

  pub(crate) fn len(&self) -> usize {
    self.bound.len()
  }

  pub(crate) fn remove_button_listeners(
    &mut self,
    document: &Document,
  ) -> Vec<NodeId> {
    let buttons = document.query_selector_all(document.root(), Self::BUTTONS);

    for button in &buttons {
      self.bound.remove(button);
    }

    self.bound.retain(|button, _| document.kind(*button).is_some());

    buttons
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn document_with_buttons(post_ids: &[&str]) -> (Document, Vec<NodeId>) {
    let mut document = Document::new();

    let root = document.root();

    let main = document.create_element("main");
    document.append_child(root, main);

    let buttons = post_ids
      .iter()
      .map(|post_id| {
        let button = build_element(&mut document, "button", SHOW_COMMENTS, None);

        if !post_id.is_empty() {
          document.set_dataset(button, "postId", post_id);
        }

        let section = document.create_element("section");
        document.set_class_name(section, "comments hide");
        document.set_dataset(section, "postId", post_id);

        document.append_child(main, button);
        document.append_child(main, section);

        button
      })
      .collect();

    (document, buttons)
  }

  #[test]
  fn only_buttons_with_post_ids_are_bound() {
    let (document, buttons) = document_with_buttons(&["1", "", "3"]);

    let mut registry = ListenerRegistry::default();

    assert_eq!(registry.add_button_listeners(&document), buttons);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.binding(buttons[0]), Some(1));
    assert_eq!(registry.binding(buttons[1]), None);
    assert_eq!(registry.binding(buttons[2]), Some(3));
  }

  #[test]
  fn adding_twice_binds_once() {
    let (document, _) = document_with_buttons(&["1", "2"]);

    let mut registry = ListenerRegistry::default();

    registry.add_button_listeners(&document);
    registry.add_button_listeners(&document);

    assert_eq!(registry.len(), 2);
  }

  #[test]
  fn removal_unbinds_by_identity() {
    let (mut document, buttons) = document_with_buttons(&["5"]);

    let mut registry = ListenerRegistry::default();
    registry.add_button_listeners(&document);

    assert_eq!(registry.remove_button_listeners(&document), buttons);
    assert_eq!(registry.len(), 0);

    let mut event = ClickEvent::new(buttons[0]);
    assert_eq!(registry.dispatch_click(&mut document, &mut event), None);
    assert!(!event.handled);
  }

  #[test]
  fn dispatch_runs_the_bound_toggle() {
    let (mut document, buttons) = document_with_buttons(&["8"]);

    let mut registry = ListenerRegistry::default();
    registry.add_button_listeners(&document);

    let mut event = ClickEvent::new(buttons[0]);

    let toggle = registry
      .dispatch_click(&mut document, &mut event)
      .and_then(Outcome::found)
      .unwrap();

    assert!(event.handled);
    assert_eq!(toggle.button, Outcome::Found(buttons[0]));
    assert_eq!(document.text_content(buttons[0]), HIDE_COMMENTS);

    let section = toggle.section.found().unwrap();
    assert!(!document.has_class(section, "hide"));
  }
}
