//! `/api/auth` endpoints.

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest, ResetPasswordRequest, TokenPairResponse};

/// Exchange credentials for a token pair.
///
/// # Errors
///
/// `Api` with the backend's message on bad credentials or a locked
/// account; transport errors otherwise.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<TokenPairResponse, ApiError> {
    api.post("/api/auth/login", request).await?.into_json()
}

/// Invalidate the current access token server-side. The local session is
/// dropped by the caller regardless of the outcome.
///
/// # Errors
///
/// Transport and status errors; callers usually ignore them.
pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty("/api/auth/logout").await?.into_unit()
}

/// Create a citizen account.
///
/// # Errors
///
/// `Api` with the validation message on rejected input.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    api.post("/api/auth/register", request).await?.into_unit()
}

/// Request a password reset email. The backend answers generically
/// whether or not the account exists.
///
/// # Errors
///
/// Transport errors only, in practice.
pub async fn forgot_password(api: &ApiClient, email: &str) -> Result<(), ApiError> {
    api.post("/api/auth/forgot-password", &serde_json::json!({ "email": email }))
        .await?
        .into_unit()
}

/// Redeem a reset token for a new password.
///
/// # Errors
///
/// `Api` with the backend message on an expired or unknown token.
pub async fn reset_password(api: &ApiClient, request: &ResetPasswordRequest) -> Result<(), ApiError> {
    api.post("/api/auth/reset-password", request).await?.into_unit()
}
