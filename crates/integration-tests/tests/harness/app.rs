//! Test application exposing one route per error flavour

use std::io;

use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    routing::{get, post},
};
use http_body_util::BodyExt;
use rest_err::{Cause, RestError, rest_error};
use rest_err_axum::{ApiResult, ErrorConfig, ErrorResponder, render_errors};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Response status and parsed body (plain text bodies become a JSON string)
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Build the app with error rendering configured by `config`
pub fn app(config: ErrorConfig) -> Router {
    init_logging();

    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/users", post(create_user))
        .route("/reports", get(report))
        .route("/health", get(|| async { "ok" }))
        .layer(axum::middleware::from_fn_with_state(
            ErrorResponder::new(config),
            render_errors,
        ))
}

/// Build the app without the rendering middleware
pub fn bare_app() -> Router {
    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/reports", get(report))
}

/// Send a request through the router without binding a socket
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    TestResponse { status, body }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn get_user(Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    match id {
        1 => Ok(Json(json!({ "id": 1, "name": "john" }))),
        403 => Err(RestError::forbidden("user profile is private").into()),
        _ => Err(rest_error!(not_found, "user not found with id {id}").into()),
    }
}

async fn create_user(Json(payload): Json<Value>) -> ApiResult<StatusCode> {
    let mut causes = Vec::new();

    if !payload["email"].as_str().is_some_and(|email| email.contains('@')) {
        causes.push(Cause::new("email", "invalid email format"));
    }
    if payload["password"].as_str().is_none_or(|password| password.len() < 8) {
        causes.push(Cause::new("password", "too short"));
    }

    if causes.is_empty() {
        Ok(StatusCode::CREATED)
    } else {
        Err(RestError::bad_request_validation("validation failed", causes).into())
    }
}

async fn report() -> ApiResult<String> {
    let rows = load_rows().map_err(anyhow::Error::from)?;
    Ok(rows)
}

fn load_rows() -> io::Result<String> {
    Err(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "open /var/lib/reports.db: permission denied",
    ))
}
