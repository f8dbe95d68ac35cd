//! Authentication endpoints.
//!
//! Request construction is kept in pure builder functions so payload shapes
//! are testable without a browser; the async wrappers just hand the request
//! to the transport in `api`.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use serde_json::json;

use super::api::{self, ApiRequest};
use super::error::ApiError;
use super::types::{AuthTokens, RegisterRequest, User};

fn login_request(email: &str, password: &str) -> ApiRequest {
    ApiRequest::post("/auth/login", json!({ "email": email, "password": password }))
}

fn register_request(data: &RegisterRequest) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(ApiRequest::post("/users/", body))
}

fn logout_request(refresh_token: &str) -> ApiRequest {
    ApiRequest::post("/auth/logout", json!({ "refresh_token": refresh_token }))
}

fn refresh_request(refresh_token: &str) -> ApiRequest {
    ApiRequest::post("/auth/refresh", json!({ "refresh_token": refresh_token }))
}

fn me_request() -> ApiRequest {
    ApiRequest::get("/auth/me")
}

/// Exchange credentials for a token pair.
pub async fn login(email: &str, password: &str) -> Result<AuthTokens, ApiError> {
    api::fetch_public_json(login_request(email, password)).await
}

/// Create a new account. Does not sign the user in.
pub async fn register(data: &RegisterRequest) -> Result<User, ApiError> {
    api::fetch_public_json(register_request(data)?).await
}

/// Invalidate the refresh token server-side.
///
/// Sent with the bearer header but without the refresh interceptor: logout
/// runs on the refresh-failure path, where a 401 retry would make the
/// in-flight refresh await itself.
pub async fn logout(refresh_token: &str) -> Result<(), ApiError> {
    api::execute_once(logout_request(refresh_token)).await
}

/// Exchange the refresh token for a new token pair.
///
/// Goes through the public path: routing a refresh through the authorized
/// transport would recurse into the interceptor.
pub async fn refresh(refresh_token: &str) -> Result<AuthTokens, ApiError> {
    api::fetch_public_json(refresh_request(refresh_token)).await
}

/// Fetch the authenticated identity.
pub async fn current_user() -> Result<User, ApiError> {
    api::fetch_json(me_request()).await
}
