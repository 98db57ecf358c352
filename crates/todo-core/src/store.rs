//! The `TodoStore` trait and the list query executor.
//!
//! The trait is implemented by storage backends (`todo-store-sqlite`, and
//! [`crate::memory::MemoryStore`] for tests). Higher layers depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Error, Result,
  filter::{Predicate, TodoFilter},
  id::TodoId,
  sort::SortOrder,
  todo::{NewTodo, Todo},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// A resolved list query: which todos, in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoQuery {
  pub predicate: Predicate,
  pub order:     SortOrder,
}

impl TodoQuery {
  /// Build the predicate and resolve the order for a request filter.
  pub fn from_filter(filter: &TodoFilter) -> Self {
    Self {
      predicate: Predicate::from_filter(filter),
      order:     SortOrder::resolve(filter.sort_by.as_deref(), filter.sort_order.as_deref()),
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a todo collection.
///
/// Each method is a single store call; consistency across concurrent calls is
/// whatever the backend provides for one operation.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TodoStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return every todo matching `query.predicate`, ordered by `query.order`
  /// with ties in insertion order. Fully materialised.
  fn find<'a>(
    &'a self,
    query: &'a TodoQuery,
  ) -> impl Future<Output = Result<Vec<Todo>, Self::Error>> + Send + 'a;

  /// Retrieve a todo by id. Returns `None` if not found.
  fn get(
    &self,
    id: TodoId,
  ) -> impl Future<Output = Result<Option<Todo>, Self::Error>> + Send + '_;

  /// Persist a validated todo under a fresh identifier and return it.
  fn insert(
    &self,
    todo: NewTodo,
  ) -> impl Future<Output = Result<TodoId, Self::Error>> + Send + '_;

  /// Remove the todo with `id`. Returns `false` if nothing was removed.
  fn delete(
    &self,
    id: TodoId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

// ─── Executor ────────────────────────────────────────────────────────────────

/// Run the list read path: build the predicate, resolve the order, and fetch
/// every matching todo in one store call.
pub async fn list_todos<S>(store: &S, filter: &TodoFilter) -> Result<Vec<Todo>>
where
  S: TodoStore,
{
  let query = TodoQuery::from_filter(filter);
  store.find(&query).await.map_err(Error::store)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{memory::MemoryStore, todo::TodoField};

  #[test]
  fn query_from_empty_filter_uses_defaults() {
    let query = TodoQuery::from_filter(&TodoFilter::default());
    assert_eq!(query.predicate, Predicate::Always);
    assert_eq!(query.order, SortOrder::default());
  }

  #[test]
  fn query_carries_predicate_and_order() {
    let filter = TodoFilter {
      body: Some("cool".into()),
      sort_by: Some("body".into()),
      sort_order: Some("desc".into()),
      ..TodoFilter::default()
    };
    let query = TodoQuery::from_filter(&filter);
    assert_eq!(query.predicate, Predicate::contains(TodoField::Body, "cool"));
    assert_eq!(query.order, SortOrder::resolve(Some("body"), Some("desc")));
  }

  #[tokio::test]
  async fn list_surfaces_store_failure() {
    let store = MemoryStore::new();
    store.set_available(false);
    let err = list_todos(&store, &TodoFilter::default()).await.unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable(_)));
  }
}
