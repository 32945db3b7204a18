//! Checks that the CORS header set shows up on the preflight and on every
//! signup-flow response, success or failure.

use anyhow::Result;
use reqwest::{header::HeaderMap, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some("POST, OPTIONS")
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok()),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn preflight_has_cors_headers_and_no_body() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .request(reqwest::Method::OPTIONS, format!("http://{}/", app.addr))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_cors_headers(res.headers());
    assert!(res.bytes().await?.is_empty(), "Preflight must have no body");

    Ok(())
}

#[tokio::test]
async fn preflight_answers_on_any_path() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .request(
            reqwest::Method::OPTIONS,
            format!("http://{}/some/nested/path", app.addr),
        )
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_cors_headers(res.headers());

    Ok(())
}

#[tokio::test]
async fn signup_success_has_cors_headers() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_signup(&json!({ "name": "Ada", "email": "ada@example.com" }))
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert_cors_headers(res.headers());

    Ok(())
}

#[tokio::test]
async fn signup_validation_error_has_cors_headers() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_signup(&json!({ "name": "Ada" })).await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_cors_headers(res.headers());

    Ok(())
}

#[tokio::test]
async fn signup_conflict_error_has_cors_headers() -> Result<()> {
    let app = TestApp::spawn().await?;

    let json_request = json!({ "name": "Ada", "email": "ada@example.com" });
    app.post_signup(&json_request).await?;
    let res = app.post_signup(&json_request).await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(res.headers());

    Ok(())
}
