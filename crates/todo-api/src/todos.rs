//! Handlers for `/todos` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/todos`      | Optional `owner`, `status`, `body`, `category`, `sortby`, `sortorder` |
//! | `GET`    | `/todos/{id}` | 400 if the id is malformed, 404 if absent |
//! | `POST`   | `/todos`      | Body: [`TodoDraft`]; returns 201 + `{"id": ...}` |
//! | `DELETE` | `/todos/{id}` | 200 with an empty body; 404 if absent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, QueryRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use serde::Serialize;
use todo_core::{
  TodoId,
  filter::TodoFilter,
  lifecycle,
  store::{TodoStore, list_todos},
  todo::{Todo, TodoDraft},
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /todos[?owner=...][&status=...][&body=...][&category=...][&sortby=...][&sortorder=asc|desc]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  query: Result<Query<TodoFilter>, QueryRejection>,
) -> Result<Json<Vec<Todo>>, ApiError>
where
  S: TodoStore,
{
  let Query(filter) = query?;
  let todos = list_todos(store.as_ref(), &filter).await?;
  tracing::debug!(count = todos.len(), ?filter, "listed todos");
  Ok(Json(todos))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /todos/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError>
where
  S: TodoStore,
{
  let todo = lifecycle::get_todo(store.as_ref(), &id).await?;
  Ok(Json(todo))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Body of a successful `POST /todos`.
#[derive(Debug, Serialize)]
pub struct Created {
  pub id: TodoId,
}

/// `POST /todos`: 201 + the new id.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  payload: Result<Json<TodoDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TodoStore,
{
  let Json(draft) = payload?;
  let id = lifecycle::add_todo(store.as_ref(), draft).await?;
  tracing::info!(%id, "created todo");
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /todos/{id}`: 200 with an empty body.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: TodoStore,
{
  match lifecycle::delete_todo(store.as_ref(), &id).await {
    Ok(()) => {
      tracing::info!(%id, "deleted todo");
      Ok(StatusCode::OK)
    }
    Err(todo_core::Error::NotFound(_)) => Err(ApiError::NotFound(format!(
      "Was unable to delete ID {id}; perhaps illegal ID or an ID for an item not in the system?"
    ))),
    Err(e) => Err(e.into()),
  }
}
