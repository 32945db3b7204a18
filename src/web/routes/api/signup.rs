use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    web::{
        data::{DeserSignup, ValidSignup},
        Result,
    },
    AppState,
};

/// Entry point for the whole surface, dispatching on the request method.
///
/// `OPTIONS` answers the CORS preflight, `POST` runs the signup flow and any
/// other method falls through to a plain 404.
pub async fn handle(State(app_state): State<AppState>, method: Method, body: Bytes) -> Response {
    match method {
        Method::OPTIONS => preflight(&app_state),
        Method::POST => signup(app_state, body).await.into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// An empty success response carrying the CORS header set.
fn preflight(app_state: &AppState) -> Response {
    let mut res = StatusCode::OK.into_response();
    app_state.cors_headers.apply(res.headers_mut());

    res
}

#[tracing::instrument(name = "Saving a new signup to the database", skip(app_state, body))]
async fn signup(app_state: AppState, body: Bytes) -> Result<Response> {
    let deser_signup: DeserSignup = serde_json::from_slice(&body)?;
    let signup: ValidSignup = deser_signup.try_into()?;

    insert_signup(&app_state, &signup).await?;

    let mut res = (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Successfully signed up!"
        })),
    )
        .into_response();
    app_state.cors_headers.apply(res.headers_mut());

    Ok(res)
}

/// Tries to insert a new signup into the database. Exactly one insert attempt
/// is made; a duplicate email fails here with a unique violation and gets
/// classified by the error mapping.
async fn insert_signup(app_state: &AppState, signup: &ValidSignup) -> Result<()> {
    let db_pool = app_state.model_mgr.db();

    sqlx::query(
        r#"
        INSERT INTO signups (id, name, email, signed_up_at)
        VALUES ($1, $2, $3, $4)
    "#,
    )
    .bind(Uuid::new_v4())
    .bind(signup.name.as_ref())
    .bind(signup.email.as_ref())
    .bind(Utc::now())
    .execute(db_pool)
    .await?;

    info!("New signup succesfully added to the list.");

    Ok(())
}
