//! HTTP client with bearer decoration and the token refresh protocol.
//!
//! PROTOCOL
//! ========
//! Every request goes out with `Authorization: Bearer <access>` when a
//! token is stored. A 401 on a request that has not been retried yet
//! triggers one refresh, then one replay; whatever the replay returns is
//! final. 403 is never retried. A failed refresh clears the pair, emits
//! `LoggedOut`, and surfaces `SessionExpired`; the caller never sees the
//! original 401 in that case. Navigation is not this layer's business.
//!
//! CONCURRENCY
//! ===========
//! Concurrent 401s coalesce onto a single in-flight refresh future, so
//! one rotation cannot invalidate another. Login/logout bump an epoch; a
//! refresh that finishes after the epoch moved must not write tokens, and
//! a request that straddles the change resolves to `Cancelled` instead of
//! leaking a stale-session response into the UI.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::events::{AuthBus, AuthEvent};
use crate::auth::store::TokenStore;
use crate::net::error::{ApiError, extract_message};
use crate::net::types::TokenPairResponse;

/// Raw response as seen by the protocol layer: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Surface non-2xx statuses as taxonomy errors.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for 401, `Forbidden` for 403, `Api` otherwise.
    pub fn require_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        match self.status {
            401 => Err(ApiError::Unauthorized(extract_message(401, &self.body))),
            403 => Err(ApiError::Forbidden(extract_message(403, &self.body))),
            status => Err(ApiError::Api { status, message: extract_message(status, &self.body) }),
        }
    }

    /// Map a successful response to a typed body.
    ///
    /// # Errors
    ///
    /// Status errors per [`Self::require_success`], `Decode` on a body
    /// this client cannot parse.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let ok = self.require_success()?;
        serde_json::from_str(&ok.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Check the status and drop the body (plain-text endpoints).
    ///
    /// # Errors
    ///
    /// Status errors per [`Self::require_success`].
    pub fn into_unit(self) -> Result<(), ApiError> {
        self.require_success().map(|_| ())
    }
}

/// HTTP verb for the target-gated fetch primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Send one HTTP request from the browser.
///
/// This is the only seam that touches `gloo-net`; every layer above it is
/// target-independent and unit-tested on the host.
///
/// # Errors
///
/// `Network` when the transport fails or the target is not a browser.
pub async fn fetch_raw(
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<RawResponse, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let builder = match bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };
        let request = match body {
            Some(json) => builder.json(json).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (method, url, bearer, body);
        Err(ApiError::Network("HTTP is only available in the browser".to_owned()))
    }
}

/// Injected refresh transport: refresh token in, rotated pair out.
pub type RefreshFn = Rc<dyn Fn(String) -> LocalBoxFuture<'static, Result<TokenPairResponse, ApiError>>>;

type SharedRefresh = Shared<LocalBoxFuture<'static, Result<(), ApiError>>>;

/// Shared REST client: token decoration plus the refresh protocol.
#[derive(Clone)]
pub struct ApiClient {
    store: Rc<dyn TokenStore>,
    bus: AuthBus,
    refresh_call: RefreshFn,
    inflight: Rc<RefCell<Option<SharedRefresh>>>,
    epoch: Rc<Cell<u64>>,
}

impl ApiClient {
    /// Client wired to the real refresh endpoint.
    #[must_use]
    pub fn new(store: Rc<dyn TokenStore>, bus: AuthBus) -> Self {
        let refresh_call: RefreshFn = Rc::new(|refresh_token: String| {
            async move {
                let body = serde_json::json!({ "refreshToken": refresh_token });
                fetch_raw(Method::Post, "/api/auth/refresh", None, Some(&body))
                    .await?
                    .into_json::<TokenPairResponse>()
            }
            .boxed_local()
        });
        Self::with_refresh(store, bus, refresh_call)
    }

    /// Client with an injected refresh transport (tests, alternate hosts).
    #[must_use]
    pub fn with_refresh(store: Rc<dyn TokenStore>, bus: AuthBus, refresh_call: RefreshFn) -> Self {
        let client = Self {
            store,
            bus,
            refresh_call,
            inflight: Rc::new(RefCell::new(None)),
            epoch: Rc::new(Cell::new(0)),
        };

        // Login and logout both invalidate whatever was in flight under
        // the previous credentials.
        let epoch = Rc::clone(&client.epoch);
        client.bus.subscribe(move |event| {
            if matches!(event, AuthEvent::LoggedIn | AuthEvent::LoggedOut) {
                epoch.set(epoch.get() + 1);
            }
        });
        client
    }

    /// Send a request through the refresh protocol.
    ///
    /// `send` is called with the current access token: once, plus once
    /// more after a successful refresh. The protocol owns retries;
    /// callers must not loop.
    ///
    /// # Errors
    ///
    /// Transport errors from `send`, `SessionExpired` when a refresh
    /// fails, `Cancelled` when the session changed mid-flight. A 401 with
    /// no stored refresh token comes back as the original `Ok` response
    /// for the caller's status mapping to surface.
    pub async fn dispatch<F, Fut>(&self, send: F) -> Result<RawResponse, ApiError>
    where
        F: Fn(Option<String>) -> Fut,
        Fut: Future<Output = Result<RawResponse, ApiError>>,
    {
        let epoch = self.epoch.get();
        let response = send(self.store.access_token()).await?;
        if self.epoch.get() != epoch {
            return Err(ApiError::Cancelled);
        }
        if response.status != 401 {
            return Ok(response);
        }
        if self.store.refresh_token().is_none() {
            // Nothing to recover with; the caller gets the original 401
            // and a higher layer decides where to navigate.
            return Ok(response);
        }

        self.run_refresh().await?;
        if self.epoch.get() != epoch {
            return Err(ApiError::Cancelled);
        }

        // Single replay; its outcome is final either way.
        send(self.store.access_token()).await
    }

    /// Await the in-flight refresh, or start one.
    async fn run_refresh(&self) -> Result<(), ApiError> {
        let shared = {
            let mut slot = self.inflight.borrow_mut();
            if let Some(existing) = slot.as_ref() {
                existing.clone()
            } else {
                let fut = Self::refresh_once(
                    Rc::clone(&self.store),
                    self.bus.clone(),
                    Rc::clone(&self.refresh_call),
                    Rc::clone(&self.epoch),
                    Rc::clone(&self.inflight),
                )
                .boxed_local()
                .shared();
                *slot = Some(fut.clone());
                fut
            }
        };
        shared.await
    }

    /// One refresh attempt; at most one of these runs at a time.
    async fn refresh_once(
        store: Rc<dyn TokenStore>,
        bus: AuthBus,
        refresh_call: RefreshFn,
        epoch: Rc<Cell<u64>>,
        inflight: Rc<RefCell<Option<SharedRefresh>>>,
    ) -> Result<(), ApiError> {
        let result = Self::rotate_tokens(store.as_ref(), &bus, &refresh_call, &epoch).await;
        inflight.borrow_mut().take();
        result
    }

    async fn rotate_tokens(
        store: &dyn TokenStore,
        bus: &AuthBus,
        refresh_call: &RefreshFn,
        epoch: &Cell<u64>,
    ) -> Result<(), ApiError> {
        let Some(refresh_token) = store.refresh_token() else {
            return Err(ApiError::SessionExpired("no refresh token stored".to_owned()));
        };

        let started_at = epoch.get();
        match (refresh_call)(refresh_token).await {
            Ok(pair) => {
                if epoch.get() != started_at {
                    // Logged out while the rotation was in flight; the new
                    // tokens must not resurrect the session.
                    return Err(ApiError::Cancelled);
                }
                store.save(&pair.access_token, pair.refresh_token.as_deref());
                bus.emit(AuthEvent::Refreshed);
                Ok(())
            }
            Err(error) => {
                log::warn!("token refresh failed: {error}");
                store.clear();
                bus.emit(AuthEvent::LoggedOut);
                Err(ApiError::SessionExpired(error.to_string()))
            }
        }
    }

    /// GET through the protocol.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn get(&self, url: &str) -> Result<RawResponse, ApiError> {
        self.dispatch(|token| {
            let url = url.to_owned();
            async move { fetch_raw(Method::Get, &url, token.as_deref(), None).await }
        })
        .await
    }

    /// POST a JSON body through the protocol.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`]; `Decode` when the body fails to serialize.
    pub async fn post<T: Serialize>(&self, url: &str, body: &T) -> Result<RawResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.dispatch(|token| {
            let url = url.to_owned();
            let body = body.clone();
            async move { fetch_raw(Method::Post, &url, token.as_deref(), Some(&body)).await }
        })
        .await
    }

    /// POST with no body (logout and friends).
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn post_empty(&self, url: &str) -> Result<RawResponse, ApiError> {
        self.dispatch(|token| {
            let url = url.to_owned();
            async move { fetch_raw(Method::Post, &url, token.as_deref(), None).await }
        })
        .await
    }

    /// PUT a JSON body through the protocol.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`]; `Decode` when the body fails to serialize.
    pub async fn put<T: Serialize>(&self, url: &str, body: &T) -> Result<RawResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.dispatch(|token| {
            let url = url.to_owned();
            let body = body.clone();
            async move { fetch_raw(Method::Put, &url, token.as_deref(), Some(&body)).await }
        })
        .await
    }

    /// DELETE through the protocol.
    ///
    /// # Errors
    ///
    /// See [`Self::dispatch`].
    pub async fn delete(&self, url: &str) -> Result<RawResponse, ApiError> {
        self.dispatch(|token| {
            let url = url.to_owned();
            async move { fetch_raw(Method::Delete, &url, token.as_deref(), None).await }
        })
        .await
    }
}

/// Handle to the shared API client context, for capture inside callbacks
/// and event handlers (the client itself holds `Rc`s).
///
/// # Panics
///
/// Panics when called outside the app root that provides `ApiClient`.
#[must_use]
pub fn use_api_handle()
-> leptos::prelude::StoredValue<ApiClient, leptos::prelude::LocalStorage> {
    leptos::prelude::use_context()
        .expect("use_api must be called inside the app root that provides ApiClient")
}

/// Access the shared API client context.
///
/// # Panics
///
/// Panics when called outside the app root that provides `ApiClient`.
#[must_use]
pub fn use_api() -> ApiClient {
    use leptos::prelude::GetValue;
    use_api_handle().get_value()
}
