#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use serde_json::Value;

use math_agent_backend::config::Config;
use math_agent_backend::store::Question;

pub fn test_config(store_url: &str) -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "info".to_string(),
        store_url: Some(store_url.to_string()),
        anon_key: Some("anon-key".to_string()),
        service_role_key: Some("service-key".to_string()),
        signup_redirect_url: None,
        allowed_email_domains: vec!["school.edu".to_string(), "gmail.com".to_string()],
        request_timeout: Duration::from_secs(2),
    }
}

pub fn create_test_app(store_url: &str) -> Router {
    math_agent_backend::app_with_config(test_config(store_url))
}

pub fn question(id: i64, difficulty: i32, correct: &str) -> Question {
    Question {
        id,
        question: format!("What is question {id}?"),
        option_a: "first".to_string(),
        option_b: "second".to_string(),
        option_c: "third".to_string(),
        option_d: "fourth".to_string(),
        correct_option: correct.to_string(),
        difficulty,
    }
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
