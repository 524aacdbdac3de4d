use super::*;

#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
  Document,
  Element(Element),
  Fragment,
  Text(String),
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
  pub(crate) children: Vec<NodeId>,
  pub(crate) kind: NodeKind,
  pub(crate) parent: Option<NodeId>,
}

impl Node {
  pub(crate) fn new(kind: NodeKind) -> Self {
    Self {
      children: Vec::new(),
      kind,
      parent: None,
    }
  }
}
