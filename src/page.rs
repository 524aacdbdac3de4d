use super::*;

pub(crate) const EMPLOYEES_OPTION: &str = "Employees";

pub(crate) const PLACEHOLDER_TEXT: &str =
  "Select an Employee to display their posts.";

/// The rendering context: the document plus handles to the two elements the
/// page is built around.
#[derive(Debug)]
pub(crate) struct Page {
  document: Document,
  listeners: ListenerRegistry,
  main: NodeId,
  next_request_id: u64,
  pending: Option<u64>,
  select_menu: NodeId,
  users: Vec<User>,
}

impl Default for Page {
  fn default() -> Self {
    Self::new()
  }
}

impl Page {
  /// Resolves the employee, disables the dropdown and hands back a ticket for
  /// the load. Returns `None` while another change is still in flight.
  pub(crate) fn begin_change(&mut self, value: Option<&str>) -> Option<ChangeTicket> {
    if self.pending.is_some() || self.document.is_disabled(self.select_menu) {
      tracing::debug!("ignoring employee change while a load is in flight");
      return None;
    }

    let ticket = ChangeTicket {
      request_id: self.next_request_id,
      user_id: self.resolve_user_id(value),
    };

    self.next_request_id += 1;
    self.pending = Some(ticket.request_id);

    self.document.set_disabled(self.select_menu, true);

    tracing::info!(user_id = ticket.user_id, "loading posts");

    Some(ticket)
  }

  pub(crate) fn click(&mut self, target: NodeId) -> Option<Outcome<CommentToggle>> {
    let mut event = ClickEvent::new(target);

    self.listeners.dispatch_click(&mut self.document, &mut event)
  }

  /// Appends the rendered posts to `<main>`, or the placeholder paragraph
  /// when there are none, and returns the appended node.
  pub(crate) fn display_posts(&mut self, bundles: Option<&[PostBundle]>) -> NodeId {
    let node = bundles
      .and_then(|bundles| render_posts(&mut self.document, bundles))
      .unwrap_or_else(|| {
        build_element(
          &mut self.document,
          "p",
          PLACEHOLDER_TEXT,
          Some("default-text"),
        )
      });

    self.document.append_child(self.main, node)
  }

  pub(crate) fn document(&self) -> &Document {
    &self.document
  }

  /// Completes a change started with `begin_change`. The dropdown is
  /// re-enabled even when `bundles` is `None` because the load was aborted.
  pub(crate) fn finish_change(
    &mut self,
    ticket: ChangeTicket,
    bundles: Option<Vec<PostBundle>>,
  ) -> Option<RefreshSummary> {
    if self.pending != Some(ticket.request_id) {
      tracing::debug!(
        request_id = ticket.request_id,
        "discarding stale employee change"
      );
      return None;
    }

    let mut page = SelectLock::hold(self);

    if bundles.is_none() {
      tracing::warn!(user_id = ticket.user_id, "posts load was aborted");
    }

    page.refresh(bundles)
  }

  pub(crate) async fn init_page(
    &mut self,
    source: &impl Source,
  ) -> (Vec<User>, Outcome<NodeId>) {
    let users = get_users(source).await;

    let select = self.populate_select_menu(Some(users.as_slice()));

    (users, select)
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.pending.is_some()
  }

  #[cfg(test)]
  pub(crate) fn listeners(&self) -> &ListenerRegistry {
    &self.listeners
  }

  pub(crate) fn main(&self) -> NodeId {
    self.main
  }

  pub(crate) fn new() -> Self {
    let mut document = Document::new();

    let root = document.root();

    let html = document.create_element("html");
    document.append_child(root, html);

    let body = document.create_element("body");
    document.append_child(html, body);

    let header = document.create_element("header");
    let title = build_element(&mut document, "h1", "Employee Posts", None);
    document.append_child(header, title);
    document.append_child(body, header);

    let select_menu = document.create_element("select");
    document.set_attribute(select_menu, "id", "selectMenu");

    let sentinel = build_element(&mut document, "option", EMPLOYEES_OPTION, None);
    document.set_attribute(sentinel, "value", EMPLOYEES_OPTION);
    document.append_child(select_menu, sentinel);
    document.append_child(body, select_menu);

    let main = document.create_element("main");
    document.append_child(body, main);

    let mut page = Self {
      document,
      listeners: ListenerRegistry::default(),
      main,
      next_request_id: 0,
      pending: None,
      select_menu,
      users: Vec::new(),
    };

    page.display_posts(None);

    page
  }

  pub(crate) fn populate_select_menu(
    &mut self,
    users: Option<&[User]>,
  ) -> Outcome<NodeId> {
    let Some(users) = users else {
      return Outcome::Invalid;
    };

    let Some(select) = self
      .document
      .query_selector(self.document.root(), "#selectMenu")
    else {
      return Outcome::Missing;
    };

    let options = build_options_from_users(&mut self.document, Some(users))
      .found()
      .unwrap_or_default();

    for option in options {
      self.document.append_child(select, option);
    }

    self.users.extend_from_slice(users);

    Outcome::Found(select)
  }

  /// Clears `<main>` and renders `bundles` into it, moving the button
  /// bindings over to the new buttons. `None` leaves the page untouched.
  pub(crate) fn refresh(
    &mut self,
    bundles: Option<Vec<PostBundle>>,
  ) -> Option<RefreshSummary> {
    let bundles = bundles?;

    let removed = self.listeners.remove_button_listeners(&self.document);

    self.document.remove_children(self.main);

    self.display_posts(Some(bundles.as_slice()));

    let added = self.listeners.add_button_listeners(&self.document);

    let summary = RefreshSummary {
      added,
      posts: bundles.len(),
      removed,
    };

    tracing::debug!(
      removed = summary.removed.len(),
      added = summary.added.len(),
      bound = self.listeners.len(),
      posts = summary.posts,
      "refreshed posts"
    );

    Some(summary)
  }

  pub(crate) fn release_select(&mut self) {
    self.pending = None;
    self.document.set_disabled(self.select_menu, false);
  }

  /// Maps a dropdown value to a user id. The "Employees" placeholder, a
  /// missing value, or anything that is not an id picks the first listed
  /// employee.
  pub(crate) fn resolve_user_id(&self, value: Option<&str>) -> u64 {
    value
      .filter(|value| *value != EMPLOYEES_OPTION)
      .and_then(|value| value.trim().parse::<u64>().ok())
      .filter(|id| *id != 0)
      .unwrap_or_else(|| self.users.first().map_or(1, |user| user.id))
  }

  /// Runs a whole change in one await. The terminal front-end takes the
  /// same steps through `State::load_employee`, which spawns the fetch, and
  /// `State::handle_event`, which applies the reply.
  #[cfg(test)]
  pub(crate) async fn select_change(
    &mut self,
    source: &impl Source,
    value: Option<&str>,
  ) -> Option<RefreshSummary> {
    let ticket = self.begin_change(value)?;

    let mut page = SelectLock::hold(self);

    let bundles = load_posts(source, ticket.user_id).await;

    page.finish_change(ticket, Some(bundles))
  }

  pub(crate) fn select_menu(&self) -> NodeId {
    self.select_menu
  }

  /// Moves the dropdown selection, unless the dropdown is disabled.
  pub(crate) fn select_option(&mut self, index: usize) -> Option<NodeId> {
    if self.document.is_disabled(self.select_menu) {
      return None;
    }

    self.document.select_index(self.select_menu, index)
  }

  pub(crate) fn select_value(&self) -> Option<String> {
    self.document.select_value(self.select_menu)
  }

  pub(crate) fn selected_index(&self) -> usize {
    self.document.selected_index(self.select_menu).unwrap_or(0)
  }

  pub(crate) fn selected_label(&self) -> String {
    let options = self
      .document
      .query_selector_all(self.select_menu, "option");

    options
      .get(self.selected_index())
      .map(|option| self.document.text_content(*option))
      .unwrap_or_default()
  }

  pub(crate) fn user(&self, user_id: u64) -> Option<&User> {
    self.users.iter().find(|user| user.id == user_id)
  }

  pub(crate) fn users(&self) -> &[User] {
    &self.users
  }
}
