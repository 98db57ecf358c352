//! Error type for `todo-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("stored id is malformed: {0}")]
  Id(#[from] todo_core::ParseIdError),

  #[error("stored category is unknown: {0}")]
  Category(#[from] todo_core::todo::UnknownCategory),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
