//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "who is logged in". Route guards, role-gated
//! dashboards, and the booking flow all read this state; only the `session`
//! service mutates it, through the pure transition methods below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AuthTokens, Role, User};

/// Authentication state: identity, token pair, and async-action flags.
///
/// Invariant: `is_authenticated` is true iff a token pair is present and has
/// not been proven invalid.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub tokens: Option<AuthTokens>,
    pub is_authenticated: bool,
    /// True until the bootstrap session restore resolves; protected UI must
    /// not render while this is set.
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, tokens: None, is_authenticated: false, is_loading: true, error: None }
    }
}

impl AuthState {
    /// An async auth action has started.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Login returned a token pair. The caller must have persisted the
    /// refresh token durably before invoking this.
    pub fn login_succeeded(&mut self, tokens: AuthTokens) {
        self.tokens = Some(tokens);
        self.is_authenticated = true;
        self.is_loading = false;
        self.error = None;
    }

    /// Login was rejected; bad credentials do not force a logout elsewhere,
    /// but any stale session data is cleared.
    pub fn login_failed(&mut self, message: String) {
        self.user = None;
        self.tokens = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Account creation failed before any login was attempted.
    pub fn registration_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Logout, or an unrecoverable refresh failure.
    pub fn session_cleared(&mut self) {
        self.user = None;
        self.tokens = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = None;
    }

    /// A refresh produced a new token pair.
    pub fn tokens_refreshed(&mut self, tokens: AuthTokens) {
        self.tokens = Some(tokens);
        self.error = None;
    }

    /// `/auth/me` resolved.
    pub fn user_loaded(&mut self, user: User) {
        self.user = Some(user);
        self.is_loading = false;
        self.error = None;
    }

    /// `/auth/me` failed. Tokens stay: a profile-fetch failure is not
    /// evidence the session is invalid.
    pub fn user_load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Merge a partial user update into the current identity.
    pub fn user_updated(&mut self, user: User) {
        if self.user.is_some() {
            self.user = Some(user);
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ---- role helpers (pure reads) ----

    pub fn has_role(&self, role: Role) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == role)
    }

    /// Either elevated role.
    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| matches!(u.role, Role::AdminHotel | Role::SuperAdmin))
    }

    pub fn is_super_admin(&self) -> bool {
        self.has_role(Role::SuperAdmin)
    }

    /// Map a resource name to its minimum required role. Unknown resources
    /// are denied.
    pub fn can_access(&self, resource: &str) -> bool {
        if !self.is_authenticated || self.user.is_none() {
            return false;
        }
        match resource {
            "admin" => self.is_admin(),
            "super_admin" => self.is_super_admin(),
            "user" => true,
            _ => false,
        }
    }
}

/// Subset of [`AuthState`] persisted across reloads. Loading and error flags
/// are deliberately excluded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub tokens: Option<AuthTokens>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl PersistedSession {
    pub fn snapshot(state: &AuthState) -> Self {
        Self {
            tokens: state.tokens.clone(),
            user: state.user.clone(),
            is_authenticated: state.is_authenticated,
        }
    }

    /// Rebuild auth state from a persisted blob. When tokens exist the state
    /// comes back in `is_loading` until the profile refetch settles.
    pub fn restore(self) -> AuthState {
        let has_tokens = self.tokens.is_some();
        AuthState {
            user: self.user,
            is_authenticated: self.is_authenticated && has_tokens,
            tokens: self.tokens,
            is_loading: has_tokens,
            error: None,
        }
    }
}
