//! Contains all the routes that this application can handle.

mod api;

use axum::Router;

use crate::AppState;

/// All the routes of the server.
///
/// The service answers on every path, so a single fallback handler is
/// installed and dispatch happens on the request method rather than the URI.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .fallback(api::signup::handle)
        .with_state(app_state)
}
