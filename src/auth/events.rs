//! Typed auth change notifications.
//!
//! Login, logout, and token refresh all need to reach every auth-aware
//! component, plus any other tab on the same origin. In-page listeners
//! subscribe to the typed bus; the browser glue mirrors each emit as an
//! `authChange` DOM event for code outside this bundle, and feeds DOM
//! `storage`/`authChange` events back into a resync callback.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::Rc;

/// DOM event name shared with other FloodCoord client builds.
pub const AUTH_CHANGE_EVENT: &str = "authChange";

/// A change to the stored session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoggedIn,
    LoggedOut,
    /// The access token was rotated; the session itself is unchanged.
    Refreshed,
}

/// Process-wide subscriber list for [`AuthEvent`]s.
///
/// Listeners must not register further listeners from inside a callback.
#[derive(Clone, Default)]
pub struct AuthBus {
    subscribers: Rc<RefCell<Vec<Box<dyn Fn(AuthEvent)>>>>,
}

impl AuthBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every subsequent emit.
    pub fn subscribe(&self, listener: impl Fn(AuthEvent) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(listener));
    }

    /// Notify all subscribers, then mirror the change as a DOM event.
    pub fn emit(&self, event: AuthEvent) {
        for listener in self.subscribers.borrow().iter() {
            listener(event);
        }
        dispatch_dom_event();
    }
}

/// Broadcast the legacy untyped `authChange` DOM event.
fn dispatch_dom_event() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(event) = web_sys::CustomEvent::new(AUTH_CHANGE_EVENT) {
                let _ = window.dispatch_event(&event);
            }
        }
    }
}

/// Re-derive session state whenever the DOM reports an auth change.
///
/// `storage` covers writes from other tabs (same-tab writes do not fire
/// it), and `authChange` covers same-tab writes from non-Rust code. The
/// callback must be idempotent: our own emits come back through the
/// mirrored `authChange` event as well.
#[cfg(target_arch = "wasm32")]
pub fn wire_dom_listeners(on_change: impl Fn() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_change = Rc::new(on_change);
    for event_name in [AUTH_CHANGE_EVENT, "storage"] {
        let handler = Rc::clone(&on_change);
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| handler());
        let _ = window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
        // Listeners live for the page lifetime.
        closure.forget();
    }
}
