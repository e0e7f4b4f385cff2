use super::*;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::executor::block_on;

use crate::auth::store::MemoryTokenStore;

fn seeded_store() -> Rc<MemoryTokenStore> {
    let store = Rc::new(MemoryTokenStore::default());
    store.save("access-1", Some("refresh-1"));
    store
}

fn counting_refresh(calls: Rc<Cell<u32>>) -> RefreshFn {
    Rc::new(move |_token| {
        calls.set(calls.get() + 1);
        async move {
            Ok(TokenPairResponse {
                access_token: "access-2".to_owned(),
                refresh_token: Some("refresh-2".to_owned()),
            })
        }
        .boxed_local()
    })
}

fn failing_refresh(calls: Rc<Cell<u32>>) -> RefreshFn {
    Rc::new(move |_token| {
        calls.set(calls.get() + 1);
        async move { Err(ApiError::Network("refresh transport down".to_owned())) }.boxed_local()
    })
}

fn resp(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

/// Future that suspends exactly once, forcing interleaving under `join!`.
struct YieldOnce {
    yielded: bool,
}

fn yield_once() -> YieldOnce {
    YieldOnce { yielded: false }
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

// =============================================================
// Steady-state dispatch
// =============================================================

#[test]
fn success_passes_through_untouched() {
    let store = seeded_store();
    let calls = Rc::new(Cell::new(0));
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        AuthBus::new(),
        counting_refresh(Rc::clone(&calls)),
    );

    let result = block_on(client.dispatch(|token| async move {
        assert_eq!(token.as_deref(), Some("access-1"));
        Ok(resp(200, "ok"))
    }));

    assert_eq!(result, Ok(resp(200, "ok")));
    assert_eq!(calls.get(), 0);
}

#[test]
fn forbidden_is_surfaced_without_refresh_or_token_loss() {
    let store = seeded_store();
    let calls = Rc::new(Cell::new(0));
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        AuthBus::new(),
        counting_refresh(Rc::clone(&calls)),
    );

    let result = block_on(client.dispatch(|_token| async move { Ok(resp(403, "no permission")) }));

    assert_eq!(result, Ok(resp(403, "no permission")));
    assert_eq!(calls.get(), 0);
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn missing_refresh_token_returns_the_original_401() {
    let store = Rc::new(MemoryTokenStore::default());
    store.save("access-1", None);
    let calls = Rc::new(Cell::new(0));
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        AuthBus::new(),
        counting_refresh(Rc::clone(&calls)),
    );

    let result = block_on(client.dispatch(|_token| async move { Ok(resp(401, "expired")) }));

    assert_eq!(result, Ok(resp(401, "expired")));
    assert_eq!(calls.get(), 0);
}

// =============================================================
// Refresh and replay
// =============================================================

#[test]
fn a_401_refreshes_and_replays_exactly_once() {
    let store = seeded_store();
    let calls = Rc::new(Cell::new(0));
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        AuthBus::new(),
        counting_refresh(Rc::clone(&calls)),
    );

    let sent = Rc::new(RefCell::new(Vec::new()));
    let result = block_on(client.dispatch(|token| {
        let sent = Rc::clone(&sent);
        async move {
            sent.borrow_mut().push(token.clone());
            if sent.borrow().len() == 1 {
                Ok(resp(401, ""))
            } else {
                Ok(resp(200, "replayed"))
            }
        }
    }));

    assert_eq!(result, Ok(resp(200, "replayed")));
    assert_eq!(calls.get(), 1);
    assert_eq!(
        *sent.borrow(),
        vec![Some("access-1".to_owned()), Some("access-2".to_owned())]
    );
    assert_eq!(store.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
}

#[test]
fn a_replay_that_fails_again_is_final() {
    let store = seeded_store();
    let calls = Rc::new(Cell::new(0));
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        AuthBus::new(),
        counting_refresh(Rc::clone(&calls)),
    );

    let attempts = Rc::new(Cell::new(0u32));
    let result = block_on(client.dispatch(|_token| {
        let attempts = Rc::clone(&attempts);
        async move {
            attempts.set(attempts.get() + 1);
            Ok(resp(401, "still expired"))
        }
    }));

    // One refresh, one replay, no second loop around.
    assert_eq!(result, Ok(resp(401, "still expired")));
    assert_eq!(calls.get(), 1);
    assert_eq!(attempts.get(), 2);
}

#[test]
fn refresh_failure_clears_tokens_and_propagates_the_refresh_error() {
    let store = seeded_store();
    let calls = Rc::new(Cell::new(0));
    let bus = AuthBus::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = Rc::clone(&events);
        bus.subscribe(move |event| events.borrow_mut().push(event));
    }
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        bus,
        failing_refresh(Rc::clone(&calls)),
    );

    let result = block_on(client.dispatch(|_token| async move { Ok(resp(401, "original 401 body")) }));

    // The refresh error wins over the original 401.
    match result {
        Err(ApiError::SessionExpired(reason)) => assert!(reason.contains("refresh transport down")),
        other => panic!("expected SessionExpired, got {other:?}"),
    }
    assert_eq!(calls.get(), 1);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(events.borrow().contains(&AuthEvent::LoggedOut));
}

// =============================================================
// Concurrency and the logout critical section
// =============================================================

#[test]
fn concurrent_401s_share_a_single_refresh() {
    let store = seeded_store();
    let calls = Rc::new(Cell::new(0));
    let refresh: RefreshFn = {
        let calls = Rc::clone(&calls);
        Rc::new(move |_token| {
            calls.set(calls.get() + 1);
            async move {
                yield_once().await;
                Ok(TokenPairResponse { access_token: "access-2".to_owned(), refresh_token: None })
            }
            .boxed_local()
        })
    };
    let client = ApiClient::with_refresh(store.clone() as Rc<dyn TokenStore>, AuthBus::new(), refresh);

    let make_send = || {
        let attempts = Rc::new(Cell::new(0u32));
        move |token: Option<String>| {
            let attempts = Rc::clone(&attempts);
            async move {
                yield_once().await;
                attempts.set(attempts.get() + 1);
                if attempts.get() == 1 {
                    Ok(resp(401, ""))
                } else {
                    Ok(RawResponse { status: 200, body: token.unwrap_or_default() })
                }
            }
        }
    };

    let (first, second) = block_on(async {
        futures::join!(client.dispatch(make_send()), client.dispatch(make_send()))
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(first.expect("first request").body, "access-2");
    assert_eq!(second.expect("second request").body, "access-2");
    // No rotation in the response; the stored refresh token survives.
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn logout_during_refresh_never_resurrects_tokens() {
    let store = seeded_store();
    let bus = AuthBus::new();
    let refresh: RefreshFn = {
        let bus = bus.clone();
        let store = Rc::clone(&store);
        Rc::new(move |_token| {
            let bus = bus.clone();
            let store = Rc::clone(&store);
            async move {
                // The user logs out while the rotation is in flight.
                store.clear();
                bus.emit(AuthEvent::LoggedOut);
                Ok(TokenPairResponse {
                    access_token: "late-access".to_owned(),
                    refresh_token: Some("late-refresh".to_owned()),
                })
            }
            .boxed_local()
        })
    };
    let client = ApiClient::with_refresh(store.clone() as Rc<dyn TokenStore>, bus, refresh);

    let result = block_on(client.dispatch(|_token| async move { Ok(resp(401, "")) }));

    assert_eq!(result, Err(ApiError::Cancelled));
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn logout_during_the_initial_send_cancels_the_request() {
    let store = seeded_store();
    let bus = AuthBus::new();
    let client = ApiClient::with_refresh(
        store.clone() as Rc<dyn TokenStore>,
        bus.clone(),
        counting_refresh(Rc::new(Cell::new(0))),
    );

    let result = block_on(client.dispatch(|_token| {
        let bus = bus.clone();
        async move {
            bus.emit(AuthEvent::LoggedOut);
            Ok(resp(200, "stale session data"))
        }
    }));

    assert_eq!(result, Err(ApiError::Cancelled));
}

// =============================================================
// Status mapping
// =============================================================

#[test]
fn require_success_maps_statuses_to_the_taxonomy() {
    assert!(resp(204, "").require_success().is_ok());
    assert!(matches!(resp(401, "").require_success(), Err(ApiError::Unauthorized(_))));
    assert!(matches!(resp(403, "").require_success(), Err(ApiError::Forbidden(_))));
    assert_eq!(
        resp(422, r#"{"message":"Contact name must not be blank"}"#).require_success(),
        Err(ApiError::Api { status: 422, message: "Contact name must not be blank".to_owned() })
    );
}

#[test]
fn into_json_reports_unparseable_bodies() {
    assert!(matches!(
        resp(200, "not json").into_json::<TokenPairResponse>(),
        Err(ApiError::Decode(_))
    ));
}
