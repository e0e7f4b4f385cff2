//! Reactive auth session state.
//!
//! The session is derived state: whatever the token store currently
//! holds, decoded. Login and logout mutate the store and re-derive
//! synchronously; bus and DOM events trigger the same re-derivation so
//! every tab and component converges on the stored pair.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::auth::claims::{self, Identity, Role};
use crate::auth::events::{AuthBus, AuthEvent};
use crate::auth::store::TokenStore;

/// Snapshot of the current session, read-only for consumers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub role: Option<Role>,
    /// True until the stored token has been decoded once after startup.
    pub loading: bool,
    pub authenticated: bool,
}

/// Derive the session snapshot from whatever the store currently holds.
///
/// `authenticated` requires both a decodable identity and a token still
/// present in the store, so state cleared externally (another tab, a
/// failed refresh) can never leave a stale logged-in UI.
#[must_use]
pub fn derive_state(store: &dyn TokenStore) -> AuthState {
    let token = store.access_token();
    let user = token.as_deref().and_then(claims::decode_identity);
    AuthState {
        authenticated: user.is_some() && token.is_some(),
        role: user.as_ref().map(|u| u.role),
        user,
        loading: false,
    }
}

/// Persist a fresh pair and return the resulting session snapshot.
pub fn apply_login(store: &dyn TokenStore, access_token: &str, refresh_token: &str) -> AuthState {
    store.save(access_token, Some(refresh_token));
    derive_state(store)
}

/// Drop the stored pair and return the signed-out snapshot. Calling this
/// twice leaves the same state as calling it once.
pub fn apply_logout(store: &dyn TokenStore) -> AuthState {
    store.clear();
    derive_state(store)
}

/// Shared auth context: reactive state plus the session operations.
#[derive(Clone)]
pub struct AuthSession {
    store: Rc<dyn TokenStore>,
    bus: AuthBus,
    state: RwSignal<AuthState>,
}

impl AuthSession {
    #[must_use]
    pub fn new(store: Rc<dyn TokenStore>, bus: AuthBus) -> Self {
        let state = RwSignal::new(AuthState { loading: true, ..AuthState::default() });
        Self { store, bus, state }
    }

    /// Reactive session state for consumers.
    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    #[must_use]
    pub fn bus(&self) -> &AuthBus {
        &self.bus
    }

    /// Persist the token pair and switch to the decoded identity. The
    /// state update is synchronous: `authenticated` is already true for
    /// the next render.
    pub fn login(&self, access_token: &str, refresh_token: &str) {
        self.state.set(apply_login(self.store.as_ref(), access_token, refresh_token));
        self.bus.emit(AuthEvent::LoggedIn);
    }

    /// Drop the session locally. Idempotent.
    pub fn logout(&self) {
        self.state.set(apply_logout(self.store.as_ref()));
        self.bus.emit(AuthEvent::LoggedOut);
    }

    /// Re-derive identity from the stored access token.
    pub fn resync(&self) {
        self.state.set(derive_state(self.store.as_ref()));
    }
}

/// Provide the auth session to the component tree and wire its change
/// listeners. Call once, at the top of `App`.
pub fn provide_auth(store: Rc<dyn TokenStore>, bus: AuthBus) -> AuthSession {
    let session = AuthSession::new(store, bus);

    // Bus events (login/logout/refresh from any component or the HTTP
    // layer) force a full re-derivation from the stored token.
    {
        let session = session.clone();
        session.bus.clone().subscribe(move |_| session.resync());
    }

    // DOM events cover other tabs and non-Rust code on the page.
    #[cfg(target_arch = "wasm32")]
    {
        let session = session.clone();
        crate::auth::events::wire_dom_listeners(move || session.resync());
    }

    // Resolve `loading` after the first render so route guards see an
    // explicit pending phase instead of issuing a flash redirect.
    {
        let session = session.clone();
        Effect::new(move || {
            if session.state.get_untracked().loading {
                session.resync();
            }
        });
    }

    // The session holds `Rc`s, so it goes into context as a thread-local
    // stored value; the Copy handle is what closures capture.
    provide_context(StoredValue::new_local(session.clone()));
    session
}

/// Handle to the auth session context, for capture inside callbacks and
/// event handlers.
///
/// # Panics
///
/// Panics when called outside the `provide_auth` subtree; that is a
/// programming error, not a runtime condition.
#[must_use]
pub fn use_auth_handle() -> StoredValue<AuthSession, LocalStorage> {
    use_context::<StoredValue<AuthSession, LocalStorage>>()
        .expect("use_auth must be called inside the auth provider subtree")
}

/// Access the auth session context.
///
/// # Panics
///
/// Panics when called outside the `provide_auth` subtree.
#[must_use]
pub fn use_auth() -> AuthSession {
    use_auth_handle().get_value()
}
