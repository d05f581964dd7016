#![allow(dead_code)]

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use firewarning_api::auth::{generate_jwt, Claims};
use firewarning_api::{app, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Fresh router over a freshly seeded in-memory store.
pub fn test_app() -> Router {
    app(AppState::seeded())
}

/// Bearer header value for a usuario, signed with the same dev secret the app
/// verifies against.
pub fn bearer(email: &str, cnpj: &str) -> String {
    let claims = Claims::new(email.to_string(), cnpj.to_string());
    format!("Bearer {}", generate_jwt(claims).expect("token"))
}

pub fn texaco_token() -> String {
    bearer("zecantor@texaco.com", "05014725000152")
}

pub fn tal_token() -> String {
    bearer("pattyr@tal.br", "03021302000134")
}

/// Drive one request through the router and decode the JSON body. The router
/// is cloned per call so the shared store state survives across requests.
pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

pub async fn get(app: &Router, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
    request(app, "GET", path, token, None).await
}
