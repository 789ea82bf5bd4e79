use super::*;

/// Dispatches document clicks to vote and unvote requests.
///
/// Bound once per page. Apart from the set of entries with a request in
/// flight, all state lives in the page itself.
pub struct VoteBinder<C> {
  client: C,
  config: Config,
  pending: Rc<RefCell<BTreeSet<String>>>,
}

impl<C: Client + 'static> VoteBinder<C> {
  pub fn new(config: Config, client: C) -> Self {
    Self {
      client,
      config,
      pending: Rc::default(),
    }
  }

  pub fn client(&self) -> &C {
    &self.client
  }

  /// Resolves a click and, if it lands on a votable entry, returns the
  /// request to run on the event loop.
  pub fn handle_click<E: Element + 'static>(
    self: &Rc<Self>,
    target: &E,
  ) -> Option<impl Future<Output = ()> + 'static> {
    log::trace!("click on {target:?}");

    let ballot = Ballot::resolve(&self.config.markers, target)?;

    let action = ballot.state.action();

    let pending = match self.config.in_flight {
      InFlight::Allow => None,
      InFlight::Guard => {
        let Some(pending) = Pending::acquire(&self.pending, &ballot.token) else {
          log::debug!("ignoring click while request in flight: {:?}", ballot.entry);
          return None;
        };
        Some(pending)
      }
    };

    let request = VoteRequest::new(&self.config.endpoints, action, ballot.token.clone());

    let binder = self.clone();

    Some(async move {
      let _pending = pending;

      match binder.submit(&request).await {
        Ok(tally) => ballot.apply(&binder.config.markers, action, &tally),
        Err(err) => err.log(),
      }
    })
  }

  pub(crate) async fn submit(&self, request: &VoteRequest) -> Result<Tally> {
    log::debug!("{request}");

    let reply = self
      .client
      .get(&request.path, &request.query())
      .await
      .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)
      .context(error::Transport {
        request: request.to_string(),
      })?;

    ensure!(
      reply.is_success(),
      error::Status {
        request: request.to_string(),
        status: reply.status,
      }
    );

    Tally::parse(request, &reply.body)
  }
}

/// Marks an entry's token as in flight until dropped.
struct Pending {
  set: Rc<RefCell<BTreeSet<String>>>,
  token: String,
}

impl Pending {
  fn acquire(set: &Rc<RefCell<BTreeSet<String>>>, token: &str) -> Option<Self> {
    if !set.borrow_mut().insert(token.into()) {
      return None;
    }

    Some(Self {
      set: set.clone(),
      token: token.into(),
    })
  }
}

impl Drop for Pending {
  fn drop(&mut self) {
    self.set.borrow_mut().remove(&self.token);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn binder(in_flight: InFlight) -> Rc<VoteBinder<FakeClient>> {
    Rc::new(VoteBinder::new(
      Config {
        in_flight,
        ..Config::default()
      },
      FakeClient::default(),
    ))
  }

  async fn click(binder: &Rc<VoteBinder<FakeClient>>, target: &FakeElement) {
    binder
      .handle_click(target)
      .expect("click should issue a request")
      .await;
  }

  #[tokio::test]
  async fn vote() {
    let page = Page::new(Some("abc123"), false);
    let binder = binder(InFlight::Guard);

    binder.client().reply(200, r#"{"entryid":1,"userid":2,"totalvotes":5}"#);
    click(&binder, &page.button).await;

    assert_eq!(binder.client().requests(), ["/vote/?tok=abc123"]);
    assert!(page.button.has_class("selfvote"));
    assert_eq!(page.counter.text(), "5");
  }

  #[tokio::test]
  async fn unvote() {
    let page = Page::new(Some("abc123"), true);
    let binder = binder(InFlight::Guard);

    binder.client().reply(200, r#"{"totalvotes":4}"#);
    click(&binder, &page.button).await;

    assert_eq!(binder.client().requests(), ["/unvote/?tok=abc123"]);
    assert!(!page.button.has_class("selfvote"));
    assert_eq!(page.counter.text(), "4");
  }

  #[tokio::test]
  async fn toggles_follow_marker() {
    let page = Page::new(Some("abc123"), false);
    let binder = binder(InFlight::Guard);

    for total in [5, 4, 5] {
      binder.client().reply(200, &format!(r#"{{"totalvotes":{total}}}"#));
      click(&binder, &page.icon).await;
      assert_eq!(page.counter.text(), total.to_string());
    }

    assert_eq!(
      binder.client().requests(),
      [
        "/vote/?tok=abc123",
        "/unvote/?tok=abc123",
        "/vote/?tok=abc123",
      ],
    );
    assert!(page.button.has_class("selfvote"));
  }

  #[tokio::test]
  async fn click_outside_button() {
    let page = Page::new(Some("abc123"), false);
    let binder = binder(InFlight::Guard);

    for target in [&page.root, &page.entry, &page.title, &page.counter] {
      assert!(binder.handle_click(target).is_none());
    }

    assert!(binder.client().requests().is_empty());
    assert_eq!(page.button.classes(), ["upvote"]);
    assert_eq!(page.counter.text(), "4");
  }

  #[tokio::test]
  async fn entry_without_token() {
    let binder = binder(InFlight::Guard);

    for token in [None, Some("")] {
      let page = Page::new(token, false);
      assert!(binder.handle_click(&page.button).is_none());
      assert!(binder.handle_click(&page.icon).is_none());
    }

    assert!(binder.client().requests().is_empty());
  }

  #[tokio::test]
  async fn failure_status_is_ignored() {
    for status in [301, 404, 500, 503] {
      for voted in [false, true] {
        let page = Page::new(Some("abc123"), voted);
        let binder = binder(InFlight::Guard);

        binder.client().reply(status, r#"{"totalvotes":99}"#);
        click(&binder, &page.button).await;

        assert_eq!(binder.client().requests().len(), 1);
        assert_eq!(page.button.has_class("selfvote"), voted);
        assert_eq!(page.counter.text(), "4");
      }
    }
  }

  #[tokio::test]
  async fn invalid_tally_is_ignored() {
    for body in ["", "<html>", r#"{"total":5}"#, r#"{"totalvotes":"5"}"#] {
      let page = Page::new(Some("abc123"), false);
      let binder = binder(InFlight::Guard);

      binder.client().reply(200, body);
      click(&binder, &page.button).await;

      assert!(!page.button.has_class("selfvote"));
      assert_eq!(page.counter.text(), "4");
    }
  }

  #[tokio::test]
  async fn transport_failure_is_ignored() {
    let page = Page::new(Some("abc123"), true);
    let binder = binder(InFlight::Guard);

    binder.client().fail();
    click(&binder, &page.button).await;

    assert_eq!(binder.client().requests(), ["/unvote/?tok=abc123"]);
    assert!(page.button.has_class("selfvote"));
    assert_eq!(page.counter.text(), "4");
  }

  #[tokio::test]
  async fn submit_errors() {
    let binder = binder(InFlight::Guard);
    let request = VoteRequest::new(&Endpoints::default(), Action::Vote, "abc123".into());

    binder.client().reply(503, "");
    assert_matches!(
      binder.submit(&request).await.unwrap_err(),
      Error::Status { status: 503, request } if request == "GET /vote/?tok=abc123",
    );

    binder.client().fail();
    assert_matches!(
      binder.submit(&request).await.unwrap_err(),
      Error::Transport { .. },
    );

    binder.client().reply(200, "{}");
    assert_matches!(
      binder.submit(&request).await.unwrap_err(),
      Error::Deserialize { .. },
    );

    binder.client().reply(201, r#"{"totalvotes":1}"#);
    assert_eq!(binder.submit(&request).await.unwrap().totalvotes, 1);
  }

  #[tokio::test]
  async fn guard_ignores_click_while_in_flight() {
    let page = Page::new(Some("abc123"), false);
    let other = Page::new(Some("def456"), false);
    let binder = binder(InFlight::Guard);

    let reply = binder.client().defer();

    let first = binder.handle_click(&page.button).unwrap();

    assert!(binder.handle_click(&page.button).is_none());
    assert!(binder.handle_click(&page.icon).is_none());

    binder.client().reply(200, r#"{"totalvotes":1}"#);
    let unrelated = binder.handle_click(&other.button).unwrap();

    reply.send(tally(5)).unwrap();
    first.await;
    unrelated.await;

    assert!(page.button.has_class("selfvote"));
    assert_eq!(page.counter.text(), "5");
    assert_eq!(other.counter.text(), "1");

    binder.client().reply(200, r#"{"totalvotes":4}"#);
    click(&binder, &page.button).await;

    assert_eq!(
      binder.client().requests(),
      [
        "/vote/?tok=abc123",
        "/vote/?tok=def456",
        "/unvote/?tok=abc123",
      ],
    );
    assert!(!page.button.has_class("selfvote"));
  }

  #[tokio::test]
  async fn guard_released_after_failure() {
    let page = Page::new(Some("abc123"), false);
    let binder = binder(InFlight::Guard);

    binder.client().reply(500, "");
    let first = binder.handle_click(&page.button).unwrap();
    assert!(binder.handle_click(&page.button).is_none());
    first.await;

    binder.client().reply(200, r#"{"totalvotes":5}"#);
    click(&binder, &page.button).await;

    assert_eq!(page.counter.text(), "5");
  }

  #[test]
  fn guard_released_when_dropped() {
    let page = Page::new(Some("abc123"), false);
    let binder = binder(InFlight::Guard);

    let first = binder.handle_click(&page.button).unwrap();
    assert!(binder.handle_click(&page.button).is_none());
    drop(first);

    assert!(binder.handle_click(&page.button).is_some());
    assert!(binder.client().requests().is_empty());
  }

  #[tokio::test]
  async fn unguarded_last_response_wins() {
    let page = Page::new(Some("abc123"), false);
    let binder = binder(InFlight::Allow);

    let early = binder.client().defer();
    let late = binder.client().defer();

    let first = binder.handle_click(&page.button).unwrap();
    let second = binder.handle_click(&page.button).unwrap();

    tokio::join!(first, second, async {
      late.send(tally(7)).unwrap();
      while page.counter.text() != "7" {
        tokio::task::yield_now().await;
      }
      early.send(tally(6)).unwrap();
    });

    assert_eq!(
      binder.client().requests(),
      ["/vote/?tok=abc123", "/vote/?tok=abc123"],
    );
    assert!(page.button.has_class("selfvote"));
    assert_eq!(page.counter.text(), "6");
  }

  #[tokio::test]
  async fn custom_endpoints() {
    let page = Page::new(Some("abc123"), false);
    let binder = Rc::new(VoteBinder::new(
      Config {
        endpoints: Endpoints {
          token_param: "t".into(),
          unvote: "/api/unvote".into(),
          vote: "/api/vote".into(),
        },
        ..Config::default()
      },
      FakeClient::default(),
    ));

    binder.client().reply(200, r#"{"totalvotes":5}"#);
    click(&binder, &page.button).await;

    assert_eq!(binder.client().requests(), ["/api/vote?t=abc123"]);
  }
}
