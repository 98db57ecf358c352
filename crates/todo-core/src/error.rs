//! Error types for `todo-core`.

use thiserror::Error;

use crate::{id::TodoId, validate::ValidationError};

/// The four outcomes a todo operation can fail with.
///
/// Every variant reaches the request boundary unchanged; nothing here is
/// retried or swallowed.
#[derive(Debug, Error)]
pub enum Error {
  /// The supplied identifier cannot be parsed into a [`TodoId`].
  #[error("malformed todo id: {0:?}")]
  MalformedIdentifier(String),

  /// A well-formed identifier that names no stored todo.
  #[error("todo not found: {0}")]
  NotFound(TodoId),

  /// A candidate todo broke a field rule; only the first broken rule is
  /// reported.
  #[error("validation failed: {0}")]
  ValidationFailed(#[from] ValidationError),

  /// The backing store could not complete the call.
  #[error("store unavailable: {0}")]
  StoreUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Box a backend error into [`Error::StoreUnavailable`].
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::StoreUnavailable(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
