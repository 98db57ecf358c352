//! Validation of candidate todos.
//!
//! Rules run in a fixed order and the first failure wins:
//! body non-empty, body length, owner non-empty, status present, category
//! in the fixed set.

use thiserror::Error;

use crate::todo::{Category, NewTodo, TodoDraft};

pub const BODY_MIN_CHARS: usize = 2;
pub const BODY_MAX_CHARS: usize = 300;

/// The first rule a candidate todo broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Todo must have a non-empty body")]
  EmptyBody,

  #[error("Todo body must be between 2 and 300 characters (got {0})")]
  BodyLength(usize),

  #[error("Todo must have a non-empty owner")]
  EmptyOwner,

  #[error("Todo must have a status")]
  MissingStatus,

  #[error("Todo must have a legal category (got {0:?})")]
  IllegalCategory(Option<String>),
}

/// Check `draft` against every rule and produce an insertable [`NewTodo`].
pub fn validate(draft: TodoDraft) -> Result<NewTodo, ValidationError> {
  let body = match draft.body {
    Some(b) if !b.is_empty() => b,
    _ => return Err(ValidationError::EmptyBody),
  };
  let len = body.chars().count();
  if !(BODY_MIN_CHARS..=BODY_MAX_CHARS).contains(&len) {
    return Err(ValidationError::BodyLength(len));
  }

  let owner = match draft.owner {
    Some(o) if !o.is_empty() => o,
    _ => return Err(ValidationError::EmptyOwner),
  };

  let status = draft.status.ok_or(ValidationError::MissingStatus)?;

  let category = draft
    .category
    .as_deref()
    .and_then(|c| c.parse::<Category>().ok())
    .ok_or(ValidationError::IllegalCategory(draft.category))?;

  Ok(NewTodo { owner, status, body, category })
}
