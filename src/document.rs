use super::*;

/// An arena-backed element tree.
///
/// Freed slots are recycled under a new generation, so a `NodeId` held past
/// a `remove_children` resolves to nothing rather than to a newer node.
#[derive(Clone, Debug)]
pub(crate) struct Document {
  free: Vec<usize>,
  root: NodeId,
  slots: Vec<Slot>,
}

impl Default for Document {
  fn default() -> Self {
    Self::new()
  }
}

impl Document {
  pub(crate) fn add_class(&mut self, id: NodeId, class: &str) {
    if let Some(element) = self.element_mut(id)
      && !element.has_class(class)
    {
      element.classes.push(class.to_string());
    }
  }

  fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    std::iter::successors(self.parent(id), |current| self.parent(*current))
  }

  /// Appends `child` under `parent` and returns the child.
  ///
  /// A fragment hands its children over in order and is then freed.
  pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
    if self.node(parent).is_none() || self.node(child).is_none() {
      return child;
    }

    if matches!(self.kind(child), Some(NodeKind::Fragment)) {
      let moved = self
        .node_mut(child)
        .map(|fragment| std::mem::take(&mut fragment.children))
        .unwrap_or_default();

      for node in moved {
        if let Some(node) = self.node_mut(node) {
          node.parent = None;
        }

        self.append_child(parent, node);
      }

      self.free(child);

      return child;
    }

    self.detach(child);

    if let Some(node) = self.node_mut(child) {
      node.parent = Some(parent);
    }

    if let Some(node) = self.node_mut(parent) {
      node.children.push(child);
    }

    child
  }

  pub(crate) fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
    self
      .element(id)
      .and_then(|element| element.attributes.get(name))
      .map(String::as_str)
  }

  pub(crate) fn children(&self, id: NodeId) -> &[NodeId] {
    self.node(id).map_or(&[], |node| node.children.as_slice())
  }

  pub(crate) fn create_element(&mut self, tag: &str) -> NodeId {
    self.insert(Node::new(NodeKind::Element(Element::new(tag))))
  }

  pub(crate) fn create_fragment(&mut self) -> NodeId {
    self.insert(Node::new(NodeKind::Fragment))
  }

  pub(crate) fn create_text(&mut self, text: &str) -> NodeId {
    self.insert(Node::new(NodeKind::Text(text.to_string())))
  }

  fn data_attribute(key: &str) -> String {
    let mut name = String::from("data-");

    for ch in key.chars() {
      if ch.is_ascii_uppercase() {
        name.push('-');
        name.push(ch.to_ascii_lowercase());
      } else {
        name.push(ch);
      }
    }

    name
  }

  /// Reads a `data-*` attribute by its camel-cased dataset key, so `postId`
  /// reads `data-post-id`.
  pub(crate) fn dataset(&self, id: NodeId, key: &str) -> Option<&str> {
    self.attribute(id, &Self::data_attribute(key))
  }

  pub(crate) fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
    let mut found = Vec::new();

    let mut stack = self.children(scope).iter().rev().copied().collect::<Vec<_>>();

    while let Some(id) = stack.pop() {
      found.push(id);
      stack.extend(self.children(id).iter().rev().copied());
    }

    found
  }

  fn detach(&mut self, child: NodeId) {
    let Some(parent) = self.parent(child) else {
      return;
    };

    if let Some(node) = self.node_mut(parent) {
      node.children.retain(|candidate| *candidate != child);
    }

    if let Some(node) = self.node_mut(child) {
      node.parent = None;
    }
  }

  pub(crate) fn element(&self, id: NodeId) -> Option<&Element> {
    match self.kind(id) {
      Some(NodeKind::Element(element)) => Some(element),
      _ => None,
    }
  }

  fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
    match self.node_mut(id).map(|node| &mut node.kind) {
      Some(NodeKind::Element(element)) => Some(element),
      _ => None,
    }
  }

  fn free(&mut self, id: NodeId) {
    let Some(slot) = self
      .slots
      .get_mut(id.index)
      .filter(|slot| slot.generation == id.generation)
    else {
      return;
    };

    let Some(node) = slot.node.take() else {
      return;
    };

    slot.generation = slot.generation.wrapping_add(1);

    self.free.push(id.index);

    for child in node.children {
      self.free(child);
    }
  }

  pub(crate) fn has_class(&self, id: NodeId, class: &str) -> bool {
    self.element(id).is_some_and(|element| element.has_class(class))
  }

  fn insert(&mut self, node: Node) -> NodeId {
    if let Some(index) = self.free.pop() {
      let slot = &mut self.slots[index];

      slot.node = Some(node);

      return NodeId {
        generation: slot.generation,
        index,
      };
    }

    self.slots.push(Slot {
      generation: 0,
      node: Some(node),
    });

    NodeId {
      generation: 0,
      index: self.slots.len() - 1,
    }
  }

  pub(crate) fn is_disabled(&self, id: NodeId) -> bool {
    self.attribute(id, "disabled").is_some()
  }

  pub(crate) fn kind(&self, id: NodeId) -> Option<&NodeKind> {
    self.node(id).map(|node| &node.kind)
  }

  #[cfg(test)]
  pub(crate) fn live_nodes(&self) -> usize {
    self.slots.iter().filter(|slot| slot.node.is_some()).count()
  }

  fn matches(&self, id: NodeId, selector: &Selector) -> bool {
    let Some((last, rest)) = selector.compounds.split_last() else {
      return false;
    };

    if !self.element(id).is_some_and(|element| last.matches(element)) {
      return false;
    }

    let mut ancestors = self.ancestors(id);

    rest.iter().rev().all(|compound| {
      ancestors.any(|ancestor| {
        self
          .element(ancestor)
          .is_some_and(|element| compound.matches(element))
      })
    })
  }

  pub(crate) fn new() -> Self {
    Self {
      free: Vec::new(),
      root: NodeId {
        generation: 0,
        index: 0,
      },
      slots: vec![Slot {
        generation: 0,
        node: Some(Node::new(NodeKind::Document)),
      }],
    }
  }

  fn node(&self, id: NodeId) -> Option<&Node> {
    self
      .slots
      .get(id.index)
      .filter(|slot| slot.generation == id.generation)
      .and_then(|slot| slot.node.as_ref())
  }

  fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
    self
      .slots
      .get_mut(id.index)
      .filter(|slot| slot.generation == id.generation)
      .and_then(|slot| slot.node.as_mut())
  }

  pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.node(id).and_then(|node| node.parent)
  }

  pub(crate) fn query_selector(
    &self,
    scope: NodeId,
    selector: &str,
  ) -> Option<NodeId> {
    self.query_selector_all(scope, selector).into_iter().next()
  }

  pub(crate) fn query_selector_all(
    &self,
    scope: NodeId,
    selector: &str,
  ) -> Vec<NodeId> {
    let selector = match Selector::parse(selector) {
      Ok(selector) => selector,
      Err(error) => {
        tracing::warn!("ignoring selector `{selector}`: {error}");
        return Vec::new();
      }
    };

    self
      .descendants(scope)
      .into_iter()
      .filter(|id| self.matches(*id, &selector))
      .collect()
  }

  pub(crate) fn remove_attribute(&mut self, id: NodeId, name: &str) {
    if let Some(element) = self.element_mut(id) {
      element.attributes.remove(name);
    }
  }

  /// Detaches and frees every child of `parent`, returning `parent`.
  pub(crate) fn remove_children(&mut self, parent: NodeId) -> NodeId {
    let children = self
      .node_mut(parent)
      .map(|node| std::mem::take(&mut node.children))
      .unwrap_or_default();

    for child in children {
      self.free(child);
    }

    parent
  }

  pub(crate) fn root(&self) -> NodeId {
    self.root
  }

  /// Marks the option at `index` as selected and returns it.
  pub(crate) fn select_index(
    &mut self,
    select: NodeId,
    index: usize,
  ) -> Option<NodeId> {
    let options = self.query_selector_all(select, "option");

    let chosen = *options.get(index)?;

    for option in options {
      self.remove_attribute(option, "selected");
    }

    self.set_attribute(chosen, "selected", "");

    Some(chosen)
  }

  pub(crate) fn select_value(&self, select: NodeId) -> Option<String> {
    let option = self
      .query_selector(select, "option[selected]")
      .or_else(|| self.query_selector(select, "option"))?;

    Some(
      self
        .attribute(option, "value")
        .map_or_else(|| self.text_content(option), str::to_string),
    )
  }

  pub(crate) fn selected_index(&self, select: NodeId) -> Option<usize> {
    let options = self.query_selector_all(select, "option");

    if options.is_empty() {
      return None;
    }

    Some(
      options
        .iter()
        .position(|option| self.attribute(*option, "selected").is_some())
        .unwrap_or(0),
    )
  }

  pub(crate) fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
    if let Some(element) = self.element_mut(id) {
      element
        .attributes
        .insert(name.to_string(), value.to_string());
    }
  }

  pub(crate) fn set_class_name(&mut self, id: NodeId, class_name: &str) {
    if let Some(element) = self.element_mut(id) {
      element.classes = class_name
        .split_whitespace()
        .map(str::to_string)
        .collect();
    }
  }

  pub(crate) fn set_dataset(&mut self, id: NodeId, key: &str, value: &str) {
    self.set_attribute(id, &Self::data_attribute(key), value);
  }

  pub(crate) fn set_disabled(&mut self, id: NodeId, disabled: bool) {
    if disabled {
      self.set_attribute(id, "disabled", "");
    } else {
      self.remove_attribute(id, "disabled");
    }
  }

  /// Replaces the children of `id` with a single text node. A lone text
  /// child is rewritten in place instead of being reallocated.
  pub(crate) fn set_text_content(&mut self, id: NodeId, text: &str) {
    if self.node(id).is_none() {
      return;
    }

    let target = match self.children(id) {
      [only] if !text.is_empty()
        && matches!(self.kind(*only), Some(NodeKind::Text(_))) =>
      {
        *only
      }
      _ => id,
    };

    if let Some(NodeKind::Text(current)) =
      self.node_mut(target).map(|node| &mut node.kind)
    {
      *current = text.to_string();
      return;
    }

    self.remove_children(id);

    if !text.is_empty() {
      let node = self.create_text(text);
      self.append_child(id, node);
    }
  }

  #[cfg(test)]
  pub(crate) fn slot_count(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn tag(&self, id: NodeId) -> Option<&str> {
    self.element(id).map(|element| element.tag.as_str())
  }

  pub(crate) fn text_content(&self, id: NodeId) -> String {
    match self.kind(id) {
      Some(NodeKind::Text(text)) => text.clone(),
      Some(_) => self
        .children(id)
        .iter()
        .map(|child| self.text_content(*child))
        .collect(),
      None => String::new(),
    }
  }

  /// Flips `class` on the element and returns whether it is now present.
  pub(crate) fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
    let Some(element) = self.element_mut(id) else {
      return false;
    };

    if let Some(position) =
      element.classes.iter().position(|candidate| candidate == class)
    {
      element.classes.remove(position);
      false
    } else {
      element.classes.push(class.to_string());
      true
    }
  }
}
