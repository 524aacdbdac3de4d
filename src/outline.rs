use super::*;

/// `<main>` flattened into terminal lines, remembering which line each
/// comment button landed on.
pub(crate) struct Outline {
  pub(crate) buttons: Vec<(NodeId, usize)>,
  pub(crate) lines: Vec<Line<'static>>,
}

impl Outline {
  pub(crate) fn button_line(&self, button: NodeId) -> Option<usize> {
    self
      .buttons
      .iter()
      .find(|(candidate, _)| *candidate == button)
      .map(|(_, line)| *line)
  }

  pub(crate) fn new(
    document: &Document,
    main: NodeId,
    focused: Option<NodeId>,
    width: usize,
  ) -> Self {
    let mut outline = Self {
      buttons: Vec::new(),
      lines: Vec::new(),
    };

    for child in document.children(main) {
      outline.paint(document, *child, 0, focused, width);
    }

    outline
  }

  fn paint(
    &mut self,
    document: &Document,
    node: NodeId,
    depth: usize,
    focused: Option<NodeId>,
    width: usize,
  ) {
    let indent = format!("{BASE_INDENT}{}", "  ".repeat(depth));

    let Some(element) = document.element(node) else {
      if let Some(NodeKind::Text(text)) = document.kind(node) {
        self.push_text(&indent, text, Style::default(), width);
      }

      return;
    };

    match element.tag.as_str() {
      "article" => {
        for child in document.children(node) {
          self.paint(document, *child, depth, focused, width);
        }

        self.lines.push(Line::from(Span::raw(indent)));
      }
      "button" => {
        let style = if focused == Some(node) {
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
          Style::default().fg(Color::Cyan)
        };

        self.buttons.push((node, self.lines.len()));

        self.lines.push(Line::from(vec![
          Span::raw(indent),
          Span::styled(format!("[ {} ]", document.text_content(node)), style),
        ]));
      }
      "h2" => self.push_text(
        &indent,
        &document.text_content(node),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
        width,
      ),
      "h3" => self.push_text(
        &indent,
        &document.text_content(node),
        Style::default().fg(Color::White),
        width,
      ),
      "p" => {
        let style = if element.has_class("default-text") {
          Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
        } else {
          Style::default().fg(Color::Gray)
        };

        self.push_text(&indent, &document.text_content(node), style, width);
      }
      "section" if element.has_class("hide") => {}
      "section" => {
        for child in document.children(node) {
          self.paint(document, *child, depth + 1, focused, width);
        }
      }
      _ => {
        for child in document.children(node) {
          self.paint(document, *child, depth, focused, width);
        }
      }
    }
  }

  fn push_text(&mut self, indent: &str, text: &str, style: Style, width: usize) {
    let wrap_width = width.saturating_sub(indent.chars().count()).max(1);

    for line in wrap_text(text, wrap_width) {
      self.lines.push(Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(line, style),
      ]));
    }
  }
}
