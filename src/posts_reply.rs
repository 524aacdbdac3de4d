use super::*;

/// Sends the outcome of a posts load back to the UI when dropped, so the
/// dropdown gets released even if the load task unwinds.
pub(crate) struct PostsReply {
  bundles: Option<Vec<PostBundle>>,
  sender: UnboundedSender<Event>,
  ticket: ChangeTicket,
}

impl PostsReply {
  pub(crate) fn deliver(mut self, bundles: Vec<PostBundle>) {
    self.bundles = Some(bundles);
  }

  pub(crate) fn new(sender: UnboundedSender<Event>, ticket: ChangeTicket) -> Self {
    Self {
      bundles: None,
      sender,
      ticket,
    }
  }
}

impl Drop for PostsReply {
  fn drop(&mut self) {
    let _ = self.sender.send(Event::Posts {
      bundles: self.bundles.take(),
      ticket: self.ticket,
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TICKET: ChangeTicket = ChangeTicket {
    request_id: 7,
    user_id: 3,
  };

  #[test]
  fn delivered_bundles_reach_the_receiver() {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    PostsReply::new(sender, TICKET).deliver(Vec::new());

    let Ok(Event::Posts { bundles, ticket }) = receiver.try_recv() else {
      panic!("expected a posts event");
    };

    assert_eq!(ticket, TICKET);
    assert_eq!(bundles, Some(Vec::new()));
    assert!(receiver.try_recv().is_err());
  }

  #[test]
  fn abandoned_reply_still_reports() {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    drop(PostsReply::new(sender, TICKET));

    let Ok(Event::Posts { bundles, ticket }) = receiver.try_recv() else {
      panic!("expected a posts event");
    };

    assert_eq!(ticket, TICKET);
    assert_eq!(bundles, None);
  }

  #[tokio::test]
  async fn reply_moved_into_a_panicking_task_still_reports() {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let reply = PostsReply::new(sender, TICKET);

    let task = tokio::spawn(async move {
      let _reply = reply;
      panic!("load failed");
    });

    assert!(task.await.is_err());

    let Some(Event::Posts { bundles, ticket }) = receiver.recv().await else {
      panic!("expected a posts event");
    };

    assert_eq!(ticket, TICKET);
    assert_eq!(bundles, None);
  }
}
