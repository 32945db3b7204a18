pub mod data;
mod error;
pub mod log;
pub mod midware;
pub mod routes;

pub use error::{ClientError, Error, Result};

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The CORS header set attached to every preflight and signup-flow response.
///
/// Built once at startup and shared through `AppState`; the plain 404 path
/// never carries these headers.
#[derive(Clone, Debug)]
pub struct CorsHeaders([(HeaderName, HeaderValue); 3]);

impl CorsHeaders {
    pub fn new() -> Self {
        CorsHeaders([
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
        ])
    }

    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.0 {
            headers.insert(name.clone(), value.clone());
        }
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self::new()
    }
}
