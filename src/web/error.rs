use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::postgres::PgDatabaseError;
use std::sync::Arc;
use strum_macros::AsRefStr;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("data parsing error: {0}")]
    DataParsing(#[from] super::data::DataParsingError),
    #[error("body deserialization error: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::DataParsing(_) => (StatusCode::BAD_REQUEST, MissingFields),
            // A unique violation on the email column means the address is taken.
            Error::Sqlx(sqlx::Error::Database(db_er)) if is_unique_violation(db_er.as_ref()) => {
                (StatusCode::INTERNAL_SERVER_ERROR, EmailTaken)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

fn is_unique_violation(er: &(dyn sqlx::error::DatabaseError + 'static)) -> bool {
    er.try_downcast_ref::<PgDatabaseError>()
        .is_some_and(|pg_er| pg_er.code() == "23505")
}

#[derive(Debug, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Name and email are required.")]
    MissingFields,
    #[display("This email address has already been registered.")]
    EmailTaken,
    #[display("An unexpected error occurred.")]
    ServiceError,
}
