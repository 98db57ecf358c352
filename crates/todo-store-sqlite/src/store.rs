//! [`SqliteStore`]: the SQLite implementation of [`TodoStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, functions::FunctionFlags};

use todo_core::{
  TodoId,
  filter::contains_ci,
  store::{TodoQuery, TodoStore},
  todo::{NewTodo, Todo},
};

use crate::{
  Result,
  encode::{RawTodo, TODO_COLUMNS, encode_category, encode_id},
  query::CompiledQuery,
  schema::{CONTAINS_CI, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A todo store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  /// Open a throwaway in-memory store.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init().await?;
    Ok(store)
  }

  /// Register the substring function and create the schema.
  async fn init(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.create_scalar_function(
          CONTAINS_CI,
          2,
          FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
          |ctx| {
            let haystack: String = ctx.get(0)?;
            let needle: String = ctx.get(1)?;
            Ok(contains_ci(&haystack, &needle))
          },
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TodoStore impl ──────────────────────────────────────────────────────────

impl TodoStore for SqliteStore {
  type Error = crate::Error;

  async fn find(&self, query: &TodoQuery) -> Result<Vec<Todo>> {
    let compiled = CompiledQuery::new(query);
    let sql = format!(
      "SELECT {TODO_COLUMNS} FROM todos WHERE {} ORDER BY {}",
      compiled.where_clause, compiled.order_clause
    );
    tracing::debug!(%sql, params = ?compiled.params, "finding todos");
    let params = compiled.params;

    let raws: Vec<RawTodo> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), RawTodo::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTodo::into_todo).collect()
  }

  async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
    let id_str = encode_id(id);

    let raw: Option<RawTodo> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TODO_COLUMNS} FROM todos WHERE todo_id = ?1"),
              rusqlite::params![id_str],
              RawTodo::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTodo::into_todo).transpose()
  }

  async fn insert(&self, todo: NewTodo) -> Result<TodoId> {
    let id = TodoId::generate();

    let id_str       = encode_id(id);
    let owner        = todo.owner().to_owned();
    let status       = todo.status();
    let body         = todo.body().to_owned();
    let category_str = encode_category(todo.category());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO todos (todo_id, owner, status, body, category)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, owner, status, body, category_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(id)
  }

  async fn delete(&self, id: TodoId) -> Result<bool> {
    let id_str = encode_id(id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM todos WHERE todo_id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    Ok(removed == 1)
  }
}
