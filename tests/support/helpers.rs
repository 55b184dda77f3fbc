// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use taskboard::application::commands::tasks::CreateTaskCommand;
use taskboard::application::commands::users::CreateUserCommand;
use taskboard::application::ports::util::SlugGenerator;
use taskboard::application::services::ApplicationServices;
use taskboard::domain::task::TaskRepository;
use taskboard::domain::user::UserRepository;
use taskboard::infrastructure::util::DefaultSlugGenerator;
use taskboard::presentation::http::state::HttpState;

pub fn build_services(store: &Arc<mocks::InMemoryStore>) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = store.clone();
    let task_repo: Arc<dyn TaskRepository> = store.clone();
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(user_repo, task_repo, slugger))
}

pub fn build_test_state(store: &Arc<mocks::InMemoryStore>) -> HttpState {
    HttpState {
        services: build_services(store),
    }
}

pub fn make_test_router(store: &Arc<mocks::InMemoryStore>) -> axum::Router {
    taskboard::presentation::http::routes::build_router(build_test_state(store))
}

pub fn user_command(username: &str, age: i32) -> CreateUserCommand {
    CreateUserCommand {
        username: username.into(),
        firstname: "First".into(),
        lastname: "Last".into(),
        age,
    }
}

pub fn task_command(user_id: i64, title: &str) -> CreateTaskCommand {
    CreateTaskCommand::builder()
        .user_id(user_id)
        .title(title)
        .content("some content")
        .build()
        .expect("complete task command")
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
