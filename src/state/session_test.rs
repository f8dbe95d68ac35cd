use super::*;

#[test]
fn storage_keys_are_namespaced_and_distinct() {
    // Both keys are removed on logout; a rename here invalidates every
    // existing browser session.
    assert_eq!(REFRESH_TOKEN_KEY, "stayhub_refresh_token");
    assert_eq!(SESSION_KEY, "stayhub_session");
    assert_ne!(REFRESH_TOKEN_KEY, SESSION_KEY);
}
