//! The session service: auth actions, persistence, and refresh wiring.
//!
//! DESIGN
//! ======
//! An explicit service value provided via context, rather than ambient module
//! state: pages grab it with `expect_context::<Session>()`, tests construct
//! the underlying `AuthState` directly. All durable-storage writes happen
//! here, and always before the in-memory flag they back, so no reader of
//! `is_authenticated == true` can observe a missing stored refresh token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{AuthTokens, RegisterRequest};
use crate::net::{api, auth_api};
use crate::state::auth::{AuthState, PersistedSession};
use crate::util::storage;

/// localStorage key for the refresh token, stored on its own.
pub const REFRESH_TOKEN_KEY: &str = "stayhub_refresh_token";
/// localStorage key for the persisted session blob.
pub const SESSION_KEY: &str = "stayhub_session";

/// Handle to the process-wide auth session.
#[derive(Clone, Copy)]
pub struct Session {
    pub state: RwSignal<AuthState>,
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Restore a persisted session at app start. With stored tokens the
    /// state stays loading until `/auth/me` settles; without them the app is
    /// immediately ready in the signed-out state.
    pub fn bootstrap(self) {
        #[cfg(feature = "hydrate")]
        {
            self.install_refresh_handler();
            let persisted: Option<PersistedSession> = storage::load_json(SESSION_KEY);
            match persisted {
                Some(blob) if blob.tokens.is_some() => {
                    let restored = blob.restore();
                    api::set_access_token(
                        restored.tokens.as_ref().map(|t| t.access_token.clone()),
                    );
                    self.state.set(restored);
                    leptos::task::spawn_local(async move {
                        self.get_current_user().await;
                    });
                }
                _ => self.state.update(|s| s.is_loading = false),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        self.state.update(|s| s.is_loading = false);
    }

    #[cfg(feature = "hydrate")]
    fn install_refresh_handler(self) {
        use futures::FutureExt;
        api::install_refresh_handler(std::rc::Rc::new(move || {
            async move { self.refresh().await }.boxed_local()
        }));
    }

    /// Sign in. On success the refresh token is persisted, the profile is
    /// fetched, and `true` is returned; on failure the session is cleared
    /// and the backend's message lands in `state.error`.
    pub async fn login(self, email: &str, password: &str) -> bool {
        self.state.update(AuthState::begin);
        match auth_api::login(email, password).await {
            Ok(tokens) => {
                // Durable write first, then the in-memory flag.
                storage::save_string(REFRESH_TOKEN_KEY, &tokens.refresh_token);
                api::set_access_token(Some(tokens.access_token.clone()));
                self.state.update(|s| s.login_succeeded(tokens));
                self.persist();
                self.get_current_user().await;
                true
            }
            Err(err) => {
                api::set_access_token(None);
                self.state.update(|s| s.login_failed(err.to_string()));
                self.persist();
                false
            }
        }
    }

    /// Create an account, then sign in with the same credentials. A failure
    /// at account creation surfaces as an error without a login attempt.
    pub async fn register(self, data: RegisterRequest) -> bool {
        self.state.update(AuthState::begin);
        let email = data.email.clone();
        let password = data.password.clone();
        match auth_api::register(&data).await {
            Ok(_) => self.login(&email, &password).await,
            Err(err) => {
                self.state.update(|s| s.registration_failed(err.to_string()));
                false
            }
        }
    }

    /// Sign out. Server-side invalidation is best-effort; local state and
    /// durable storage are cleared unconditionally, so this never fails
    /// from the caller's perspective.
    pub async fn logout(self) {
        let refresh_token = self
            .state
            .get_untracked()
            .tokens
            .map(|t| t.refresh_token)
            .or_else(|| storage::load_string(REFRESH_TOKEN_KEY));
        if let Some(token) = refresh_token {
            if let Err(err) = auth_api::logout(&token).await {
                leptos::logging::warn!("server logout failed (ignored): {err}");
            }
        }
        storage::remove(REFRESH_TOKEN_KEY);
        storage::remove(SESSION_KEY);
        api::set_access_token(None);
        self.state.update(AuthState::session_cleared);
    }

    /// Exchange the stored refresh token for a new pair. A failed refresh
    /// means the session is unrecoverable and forces a full logout.
    pub async fn refresh(self) -> Option<AuthTokens> {
        let stored = storage::load_string(REFRESH_TOKEN_KEY)
            .or_else(|| self.state.get_untracked().tokens.map(|t| t.refresh_token));
        let Some(refresh_token) = stored else {
            self.logout().await;
            return None;
        };
        match auth_api::refresh(&refresh_token).await {
            Ok(tokens) => {
                storage::save_string(REFRESH_TOKEN_KEY, &tokens.refresh_token);
                api::set_access_token(Some(tokens.access_token.clone()));
                self.state.update(|s| s.tokens_refreshed(tokens.clone()));
                self.persist();
                Some(tokens)
            }
            Err(err) => {
                leptos::logging::warn!("token refresh failed, clearing session: {err}");
                self.logout().await;
                None
            }
        }
    }

    /// Fetch `/auth/me`. Failure records an error and stops loading but
    /// keeps tokens: "can't fetch profile" is not "invalid session".
    pub async fn get_current_user(self) {
        match auth_api::current_user().await {
            Ok(user) => {
                self.state.update(|s| s.user_loaded(user));
                self.persist();
            }
            Err(err) => self.state.update(|s| s.user_load_failed(err.to_string())),
        }
    }

    fn persist(self) {
        let snapshot = self.state.with_untracked(PersistedSession::snapshot);
        storage::save_json(SESSION_KEY, &snapshot);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
