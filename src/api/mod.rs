pub mod endpoints;
pub mod router;
pub mod types;

use axum::response::{IntoResponse, Response};
use axum::Json;
use axum::http::StatusCode;

use crate::db;

impl axum::extract::FromRef<db::Database> for sqlx::PgPool {
    fn from_ref(input: &db::Database) -> Self {
        input.pool.clone()
    }
}

impl types::ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<sqlx::Error> for types::ErrorResponse {
    fn from(value: sqlx::Error) -> Self {
        types::ErrorResponse::internal(format!("db returned error: {value}"))
    }
}
