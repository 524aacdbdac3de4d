use super::*;

// List endpoints fall back to an empty collection on failure while
// single-resource endpoints fall back to `Outcome::Missing`.

pub(crate) async fn get_post_comments(
  source: &impl Source,
  post_id: u64,
) -> Outcome<Vec<Comment>> {
  if post_id == 0 {
    return Outcome::Invalid;
  }

  match source
    .fetch_as::<Vec<Comment>>(&format!("/comments?postId={post_id}"))
    .await
  {
    Ok(mut comments) => {
      comments.retain(|comment| comment.post_id == post_id);
      tracing::debug!(post_id, count = comments.len(), "fetched comments");
      Outcome::Found(comments)
    }
    Err(error) => {
      tracing::error!(post_id, %error, "could not fetch post comments");
      Outcome::Found(Vec::new())
    }
  }
}

pub(crate) async fn get_user(source: &impl Source, user_id: u64) -> Outcome<User> {
  if user_id == 0 {
    return Outcome::Invalid;
  }

  match source.fetch_as::<User>(&format!("/users/{user_id}")).await {
    Ok(user) => Outcome::Found(user),
    Err(error) => {
      tracing::error!(user_id, %error, "could not fetch user");
      Outcome::Missing
    }
  }
}

pub(crate) async fn get_user_posts(
  source: &impl Source,
  user_id: u64,
) -> Outcome<Vec<Post>> {
  if user_id == 0 {
    return Outcome::Invalid;
  }

  match source
    .fetch_as::<Vec<Post>>(&format!("/posts?userId={user_id}"))
    .await
  {
    Ok(posts) => {
      tracing::info!(user_id, count = posts.len(), "fetched user posts");
      Outcome::Found(posts)
    }
    Err(error) => {
      tracing::error!(user_id, %error, "could not fetch user posts");
      Outcome::Found(Vec::new())
    }
  }
}

pub(crate) async fn get_users(source: &impl Source) -> Vec<User> {
  match source.fetch_as::<Vec<User>>("/users").await {
    Ok(users) => {
      tracing::info!(count = users.len(), "fetched users");
      users
    }
    Err(error) => {
      tracing::error!(%error, "could not fetch users");
      Vec::new()
    }
  }
}
