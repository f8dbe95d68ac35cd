//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated and
//! wrong-role redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::session::Session;

/// Whether an unauthenticated redirect should fire: auth has settled and no
/// session is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_loading && !state.is_authenticated
}

/// Whether a role redirect should fire: auth has settled and the user lacks
/// the resource.
pub fn should_redirect_role(state: &AuthState, resource: &str) -> bool {
    !state.is_loading && !state.can_access(resource)
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.state.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded and the user cannot access
/// `resource`.
pub fn install_role_redirect<F>(session: Session, resource: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.state.with(|s| should_redirect_role(s, resource)) {
            navigate("/", NavigateOptions::default());
        }
    });
}
