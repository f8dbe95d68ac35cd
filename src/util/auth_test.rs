use super::*;
use crate::net::types::{AuthTokens, Gender, Role, User};

fn signed_in(role: Role) -> AuthState {
    let mut state = AuthState::default();
    state.login_succeeded(AuthTokens {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 1800,
    });
    state.user_loaded(User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        age: 31,
        mobile_number: "+301".to_owned(),
        job_type: None,
        gender: Gender::Female,
        role,
        hotel_id: None,
        is_active: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        last_login: None,
    });
    state
}

#[test]
fn should_redirect_unauth_when_settled_and_signed_out() {
    let mut state = AuthState::default();
    state.session_cleared();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(state.is_loading);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_signed_in() {
    assert!(!should_redirect_unauth(&signed_in(Role::Viewer)));
}

#[test]
fn role_redirect_fires_for_insufficient_role_only() {
    assert!(should_redirect_role(&signed_in(Role::Viewer), "admin"));
    assert!(!should_redirect_role(&signed_in(Role::AdminHotel), "admin"));
    assert!(should_redirect_role(&signed_in(Role::AdminHotel), "super_admin"));
    assert!(!should_redirect_role(&signed_in(Role::SuperAdmin), "super_admin"));
}

#[test]
fn role_redirect_waits_for_auth_to_settle() {
    let state = AuthState::default();
    assert!(!should_redirect_role(&state, "admin"));
}
