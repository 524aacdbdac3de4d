use super::*;

/// In-memory `Source` serving canned JSON by path.
#[derive(Default)]
pub(crate) struct FakeSource {
  failing: HashSet<String>,
  requests: Mutex<Vec<String>>,
  routes: HashMap<String, Value>,
}

impl FakeSource {
  pub(crate) fn fail(mut self, path: &str) -> Self {
    self.failing.insert(path.to_string());
    self
  }

  pub(crate) fn requests(&self) -> Vec<String> {
    self
      .requests
      .lock()
      .map(|requests| requests.clone())
      .unwrap_or_default()
  }

  pub(crate) fn route(mut self, path: &str, body: Value) -> Self {
    self.routes.insert(path.to_string(), body);
    self
  }

  /// Serves the usual `/users`, `/users/{id}`, `/posts?userId=` and
  /// `/comments?postId=` routes for the given records.
  pub(crate) fn with_records(
    users: &[Value],
    posts: &[Value],
    comments: &[Value],
  ) -> Self {
    let mut source =
      Self::default().route("/users", Value::Array(users.to_vec()));

    for user in users {
      let id = &user["id"];

      source = source.route(&format!("/users/{id}"), user.clone()).route(
        &format!("/posts?userId={id}"),
        Value::Array(
          posts
            .iter()
            .filter(|post| post["userId"] == *id)
            .cloned()
            .collect(),
        ),
      );
    }

    for post in posts {
      let id = &post["id"];

      source = source.route(
        &format!("/comments?postId={id}"),
        Value::Array(
          comments
            .iter()
            .filter(|comment| comment["postId"] == *id)
            .cloned()
            .collect(),
        ),
      );
    }

    source
  }
}

impl Source for FakeSource {
  async fn fetch(&self, path: &str) -> Result<Value, FetchError> {
    if let Ok(mut requests) = self.requests.lock() {
      requests.push(path.to_string());
    }

    if self.failing.contains(path) {
      return Err(FetchError::Status {
        status: StatusCode::SERVICE_UNAVAILABLE,
        url: path.to_string(),
      });
    }

    self
      .routes
      .get(path)
      .cloned()
      .ok_or_else(|| FetchError::Status {
        status: StatusCode::NOT_FOUND,
        url: path.to_string(),
      })
  }
}

pub(crate) fn comment_json(post_id: u64, id: u64) -> Value {
  serde_json::json!({
    "postId": post_id,
    "id": id,
    "name": format!("comment {id}"),
    "email": format!("commenter{id}@example.com"),
    "body": format!("comment body {id}"),
  })
}

pub(crate) fn post_json(user_id: u64, id: u64) -> Value {
  serde_json::json!({
    "userId": user_id,
    "id": id,
    "title": format!("post title {id}"),
    "body": format!("post body {id}"),
  })
}

pub(crate) fn user_json(id: u64, name: &str) -> Value {
  serde_json::json!({
    "id": id,
    "name": name,
    "username": name.to_lowercase(),
    "email": format!("{}@example.com", name.to_lowercase()),
    "company": {
      "name": format!("{name} Corp"),
      "catchPhrase": format!("{name} gets it done"),
    },
  })
}
