//! Authorized REST transport with transparent token refresh.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! PROTOCOL
//! ========
//! Every authorized request attaches `Authorization: Bearer <access token>`.
//! A 401 on a request that has not been retried joins the single-flight
//! refresh; on refresh success the original request is re-issued once with
//! the new token, on refresh failure the caller sees `ApiError::Unauthorized`
//! (the session's own refresh-failure path has already forced a logout).
//! Requests are kept as rebuildable descriptions (`ApiRequest`) precisely so
//! the retry can re-issue them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::single_flight::SingleFlight;
#[cfg(feature = "hydrate")]
use super::types::AuthTokens;

/// HTTP methods used by the REST layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A rebuildable request description.
///
/// `path` is relative to the `/api` prefix; `body` is serialized JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), body: Some(body) }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self { method: HttpMethod::Put, path: path.into(), body: Some(body) }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Delete, path: path.into(), body: None }
    }

    /// Absolute URL for this request.
    pub fn url(&self) -> String {
        format!("/api{}", self.path)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

/// Whether a response status should trigger a refresh-and-retry cycle.
#[cfg(any(test, feature = "hydrate"))]
fn should_attempt_refresh(status: u16, already_retried: bool) -> bool {
    status == 401 && !already_retried
}

/// Extract the backend's `detail` message from an error body, falling back
/// to a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn detail_from_body(body: Option<&Value>, status: u16) -> String {
    body.and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("request failed: {status}"), str::to_owned)
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::future::LocalBoxFuture;

    use super::{
        ApiError, ApiRequest, AuthTokens, HttpMethod, SingleFlight, Value, bearer_header,
        detail_from_body,
    };

    /// Installed by the session service at bootstrap; breaks the dependency
    /// cycle between the transport and the session state.
    pub type RefreshHandler = Rc<dyn Fn() -> LocalBoxFuture<'static, Option<AuthTokens>>>;

    thread_local! {
        static ACCESS_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
        static REFRESH_HANDLER: RefCell<Option<RefreshHandler>> = const { RefCell::new(None) };
        static REFRESH_FLIGHT: Rc<SingleFlight<Option<AuthTokens>>> = SingleFlight::new();
    }

    pub fn set_access_token(token: Option<String>) {
        ACCESS_TOKEN.with(|t| *t.borrow_mut() = token);
    }

    pub fn access_token() -> Option<String> {
        ACCESS_TOKEN.with(|t| t.borrow().clone())
    }

    pub fn install_refresh_handler(handler: RefreshHandler) {
        REFRESH_HANDLER.with(|h| *h.borrow_mut() = Some(handler));
    }

    async fn dispatch(
        req: &ApiRequest,
        authorized: bool,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use gloo_net::http::Request;

        let url = req.url();
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        if authorized {
            if let Some(token) = access_token() {
                builder = builder.header("Authorization", &bearer_header(&token));
            }
        }
        let request = match &req.body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        request.send().await.map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Join (or start) the shared refresh flight.
    async fn refresh_shared() -> Option<AuthTokens> {
        let handler = REFRESH_HANDLER.with(|h| h.borrow().clone())?;
        let flight = REFRESH_FLIGHT.with(Rc::clone);
        flight.join(move || handler()).await
    }

    async fn error_from(resp: gloo_net::http::Response) -> ApiError {
        let status = resp.status();
        let body = resp.json::<Value>().await.ok();
        ApiError::Status { code: status, detail: detail_from_body(body.as_ref(), status) }
    }

    /// Send an authorized request, refreshing the token once on 401.
    async fn send_authorized(req: &ApiRequest) -> Result<gloo_net::http::Response, ApiError> {
        let resp = dispatch(req, true).await?;
        if !super::should_attempt_refresh(resp.status(), false) {
            return Ok(resp);
        }
        if refresh_shared().await.is_none() {
            return Err(ApiError::Unauthorized);
        }
        dispatch(req, true).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn fetch_json<T: serde::de::DeserializeOwned>(
        req: ApiRequest,
    ) -> Result<T, ApiError> {
        let resp = send_authorized(&req).await?;
        decode(resp).await
    }

    pub async fn fetch_public_json<T: serde::de::DeserializeOwned>(
        req: ApiRequest,
    ) -> Result<T, ApiError> {
        let resp = dispatch(&req, false).await?;
        decode(resp).await
    }

    pub async fn execute(req: ApiRequest) -> Result<(), ApiError> {
        let resp = send_authorized(&req).await?;
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }

    /// Authorized request that never joins the refresh flight. A 401 is
    /// returned to the caller as-is.
    ///
    /// Required for requests issued *from within* the refresh path itself
    /// (logout during an expired session): joining the flight there would
    /// hand the refresh future its own handle to await.
    pub async fn execute_once(req: ApiRequest) -> Result<(), ApiError> {
        let resp = dispatch(&req, true).await?;
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{RefreshHandler, install_refresh_handler};

/// Record the access token attached to authorized requests.
pub fn set_access_token(token: Option<String>) {
    #[cfg(feature = "hydrate")]
    browser::set_access_token(token);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Authorized GET/POST/PUT returning a decoded JSON body.
pub async fn fetch_json<T: DeserializeOwned>(req: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::fetch_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::unavailable())
    }
}

/// Unauthenticated request returning a decoded JSON body (login, register,
/// refresh). Never triggers the refresh interceptor.
pub async fn fetch_public_json<T: DeserializeOwned>(req: ApiRequest) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::fetch_public_json(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::unavailable())
    }
}

/// Authorized request where the response body is irrelevant.
pub async fn execute(req: ApiRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::execute(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::unavailable())
    }
}

/// Authorized request with no refresh-and-retry on 401. Safe to call from
/// inside the refresh path; `execute` is not.
pub async fn execute_once(req: ApiRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::execute_once(req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::unavailable())
    }
}
