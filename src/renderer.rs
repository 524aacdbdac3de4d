use super::*;

const CONCURRENT_POSTS: usize = 8;

pub(crate) fn display_comments(
  document: &mut Document,
  post_id: u64,
  comments: Option<&[Comment]>,
) -> Outcome<NodeId> {
  if post_id == 0 {
    return Outcome::Invalid;
  }

  let section = document.create_element("section");

  document.set_class_name(section, "comments");
  document.add_class(section, "hide");
  document.set_dataset(section, "postId", &post_id.to_string());

  if let Outcome::Found(fragment) = build_comments_fragment(document, comments) {
    document.append_child(section, fragment);
  }

  Outcome::Found(section)
}

/// Fetches the author and the comments of one post at the same time.
pub(crate) async fn fetch_post_bundle(source: &impl Source, post: Post) -> PostBundle {
  let (author, comments) = futures::join!(
    get_user(source, post.user_id),
    get_post_comments(source, post.id),
  );

  PostBundle {
    author,
    comments: comments.found().unwrap_or_default(),
    post,
  }
}

/// Fetches bundles for every post, a few posts at a time, keeping the order
/// of `posts`.
pub(crate) async fn fetch_post_bundles(
  source: &impl Source,
  posts: Vec<Post>,
) -> Vec<PostBundle> {
  stream::iter(posts.into_iter().map(|post| fetch_post_bundle(source, post)))
    .buffered(CONCURRENT_POSTS)
    .collect()
    .await
}

/// Everything a refresh needs for one employee. Failures have already been
/// logged and flattened to an empty list by the time this returns.
pub(crate) async fn load_posts(source: &impl Source, user_id: u64) -> Vec<PostBundle> {
  let posts = get_user_posts(source, user_id).await.found().unwrap_or_default();

  fetch_post_bundles(source, posts).await
}

pub(crate) fn render_post(document: &mut Document, bundle: &PostBundle) -> NodeId {
  let post = &bundle.post;

  let article = document.create_element("article");

  let mut children = vec![
    build_element(document, "h2", &post.title, None),
    build_element(document, "p", &post.body, None),
    build_element(document, "p", &format!("Post ID: {}", post.id), None),
  ];

  if let Outcome::Found(author) = &bundle.author {
    children.push(build_element(
      document,
      "p",
      &format!("Author: {} with {}", author.name, author.company.name),
      None,
    ));

    children.push(build_element(
      document,
      "p",
      &author.company.catch_phrase,
      None,
    ));
  }

  let button = build_element(document, "button", SHOW_COMMENTS, None);
  document.set_dataset(button, "postId", &post.id.to_string());
  children.push(button);

  if let Outcome::Found(section) =
    display_comments(document, post.id, Some(bundle.comments.as_slice()))
  {
    children.push(section);
  }

  for child in children {
    document.append_child(article, child);
  }

  article
}

/// Builds one fragment holding an article per bundle, in order. `None` means
/// there was nothing to render and the caller should show a placeholder.
pub(crate) fn render_posts(
  document: &mut Document,
  bundles: &[PostBundle],
) -> Option<NodeId> {
  if bundles.is_empty() {
    return None;
  }

  let fragment = document.create_fragment();

  for bundle in bundles {
    let article = render_post(document, bundle);
    document.append_child(fragment, article);
  }

  Some(fragment)
}
