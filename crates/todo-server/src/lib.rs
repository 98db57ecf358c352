//! HTTP host for the todo API.
//!
//! Wires configuration, the SQLite store, optional seed data and request
//! tracing around [`todo_api::api_router`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use serde::Deserialize;
use thiserror::Error;
use todo_core::{TodoId, lifecycle::add_todo, store::TodoStore, todo::TodoDraft};
use todo_store_sqlite::SqliteStore;
use tower_http::trace::TraceLayer;

/// `store_path` value that selects a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TODOS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: String,
  #[serde(default)]
  pub seed_path:  Option<PathBuf>,
}

impl ServerConfig {
  /// Layer defaults, the optional file at `path`, and the environment.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 4567)?
      .set_default("store_path", "todos.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TODOS"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// Open the store named by `store_path`.
pub async fn open_store(store_path: &str) -> todo_store_sqlite::Result<SqliteStore> {
  if store_path == IN_MEMORY {
    SqliteStore::open_in_memory().await
  } else {
    SqliteStore::open(store_path).await
  }
}

// ─── Seeding ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("failed to read seed file: {0}")]
  Read(#[from] std::io::Error),

  #[error("seed file is not a JSON array of todos: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("seed entry {index} was rejected: {source}")]
  Rejected {
    index:  usize,
    #[source]
    source: todo_core::Error,
  },
}

/// Insert every draft in the JSON array at `path`, in file order.
///
/// Each entry goes through the same validation as `POST /todos`; the first
/// rejected entry stops the import.
pub async fn seed<S>(store: &S, path: &Path) -> Result<Vec<TodoId>, SeedError>
where
  S: TodoStore,
{
  let raw = tokio::fs::read(path).await?;
  let drafts: Vec<TodoDraft> = serde_json::from_slice(&raw)?;

  let mut ids = Vec::with_capacity(drafts.len());
  for (index, draft) in drafts.into_iter().enumerate() {
    let id = add_todo(store, draft)
      .await
      .map_err(|source| SeedError::Rejected { index, source })?;
    ids.push(id);
  }
  tracing::info!(count = ids.len(), path = %path.display(), "seeded todos");
  Ok(ids)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: the API under `/api`, with request
/// tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: TodoStore + 'static,
{
  Router::new()
    .nest("/api", todo_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
