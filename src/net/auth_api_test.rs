use serde_json::json;

use super::*;
use crate::net::api::HttpMethod;
use crate::net::types::Gender;

#[test]
fn login_request_posts_credentials() {
    let req = login_request("alice@example.com", "hunter2");
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.body, Some(json!({"email": "alice@example.com", "password": "hunter2"})));
}

#[test]
fn register_request_posts_to_users_collection() {
    let data = RegisterRequest {
        name: "Bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "secret".to_owned(),
        age: 28,
        mobile_number: "+303".to_owned(),
        job_type: None,
        gender: Gender::Male,
        role: None,
    };
    let req = register_request(&data).unwrap();
    assert_eq!(req.path, "/users/");
    let body = req.body.unwrap();
    assert_eq!(body["email"], "bob@example.com");
    assert_eq!(body["password"], "secret");
    assert!(body.get("role").is_none());
}

#[test]
fn logout_and_refresh_carry_the_refresh_token() {
    let req = logout_request("rt-1");
    assert_eq!(req.path, "/auth/logout");
    assert_eq!(req.body, Some(json!({"refresh_token": "rt-1"})));

    let req = refresh_request("rt-2");
    assert_eq!(req.path, "/auth/refresh");
    assert_eq!(req.body, Some(json!({"refresh_token": "rt-2"})));
}

#[test]
fn me_request_is_a_plain_get() {
    let req = me_request();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/auth/me");
    assert_eq!(req.body, None);
}
