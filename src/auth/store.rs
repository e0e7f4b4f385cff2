//! Token persistence.
//!
//! The access/refresh pair is the only client-side persisted state. The
//! store is an injected trait rather than ambient `localStorage` access,
//! so the protocol core can run against an in-memory pair in tests and
//! non-browser builds.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key shared with every other FloodCoord client build.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh credential.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Persistent home of the session token pair.
///
/// The pair lives and dies together: `clear` always removes both tokens,
/// and no expiry is tracked client-side; a rejected request is how the
/// client learns the access token aged out.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    /// Persist a new pair. `refresh` is `None` when the refresh response
    /// did not rotate the refresh token; the stored one stays in place.
    fn save(&self, access: &str, refresh: Option<&str>);
    /// Remove both tokens.
    fn clear(&self);
}

/// In-memory store for tests and non-browser targets.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RefCell<(Option<String>, Option<String>)>,
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens.borrow().0.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.borrow().1.clone()
    }

    fn save(&self, access: &str, refresh: Option<&str>) {
        let mut tokens = self.tokens.borrow_mut();
        tokens.0 = Some(access.to_owned());
        if let Some(refresh) = refresh {
            tokens.1 = Some(refresh.to_owned());
        }
    }

    fn clear(&self) {
        *self.tokens.borrow_mut() = (None, None);
    }
}

/// `localStorage`-backed store used in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
    }

    fn refresh_token(&self) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(REFRESH_TOKEN_KEY).ok().flatten())
    }

    fn save(&self, access: &str, refresh: Option<&str>) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            if let Some(refresh) = refresh {
                let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

/// Store for the current target: `localStorage` in the browser, an
/// in-memory pair elsewhere.
#[must_use]
pub fn default_store() -> Rc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryTokenStore::default())
    }
}
