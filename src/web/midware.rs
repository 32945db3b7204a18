use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    web::{log, Error, REQUEST_ID_HEADER},
    AppState,
};

/// Maps every outgoing response. If a handler failed, the `Error` it stuffed
/// into the response extensions is converted into the client-facing JSON body
/// (with the CORS header set), and either way a structured logline is emitted.
pub async fn response_mapper(
    State(app_state): State<AppState>,
    req_method: Method,
    uri: Uri,
    resp: Response,
) -> Response {
    // The request id was propagated onto the response by the layer below us.
    let uuid = resp
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|id| id.to_str().ok())
        .and_then(|id| Uuid::parse_str(id).ok())
        .unwrap_or_else(Uuid::new_v4);

    let web_error = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({ "error": cl_err.to_string() });

        let mut res = (*status, Json(client_error_body)).into_response();
        app_state.cors_headers.apply(res.headers_mut());
        res
    });

    #[allow(clippy::redundant_pattern_matching)]
    if let Ok(_) = log::log_request(
        uuid,
        req_method,
        uri,
        resp.status(),
        web_error,
        client_status_and_error,
    )
    .await
    {}

    err_resp.unwrap_or(resp)
}
