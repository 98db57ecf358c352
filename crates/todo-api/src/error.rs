//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Returned for a malformed id on any single-todo route.
pub const MALFORMED_ID_MESSAGE: &str = "The requested todo id wasn't a legal Mongo Object ID.";

/// Returned when `GET /todos/{id}` names no todo.
pub const NOT_FOUND_MESSAGE: &str = "The requested todo was not found";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<todo_core::Error> for ApiError {
  fn from(e: todo_core::Error) -> Self {
    use todo_core::Error;
    match e {
      Error::MalformedIdentifier(_) => Self::BadRequest(MALFORMED_ID_MESSAGE.to_owned()),
      Error::NotFound(_) => Self::NotFound(NOT_FOUND_MESSAGE.to_owned()),
      Error::ValidationFailed(v) => Self::BadRequest(v.to_string()),
      Error::StoreUnavailable(source) => Self::Store(source),
    }
  }
}

// Extractor rejections keep axum's explanation but use the JSON error shape
// and a 400 status.
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self { Self::BadRequest(rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store call failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
