//! Single-record operations: lookup, insertion and deletion.
//!
//! These bypass the list query path entirely. Each performs at most one store
//! call after local parsing/validation.

use crate::{
  Error, Result,
  id::TodoId,
  store::TodoStore,
  todo::{Todo, TodoDraft},
  validate::validate,
};

/// Parse a client-supplied identifier.
pub fn parse_id(raw: &str) -> Result<TodoId> {
  raw
    .parse()
    .map_err(|_| Error::MalformedIdentifier(raw.to_owned()))
}

/// Look up exactly one todo.
pub async fn get_todo<S>(store: &S, raw_id: &str) -> Result<Todo>
where
  S: TodoStore,
{
  let id = parse_id(raw_id)?;
  store
    .get(id)
    .await
    .map_err(Error::store)?
    .ok_or(Error::NotFound(id))
}

/// Validate `draft` and insert it. Invalid drafts never reach the store.
pub async fn add_todo<S>(store: &S, draft: TodoDraft) -> Result<TodoId>
where
  S: TodoStore,
{
  let todo = validate(draft)?;
  store.insert(todo).await.map_err(Error::store)
}

/// Delete exactly one todo. Deleting an id that is already gone fails with
/// [`Error::NotFound`].
pub async fn delete_todo<S>(store: &S, raw_id: &str) -> Result<()>
where
  S: TodoStore,
{
  let id = parse_id(raw_id)?;
  if store.delete(id).await.map_err(Error::store)? {
    Ok(())
  } else {
    Err(Error::NotFound(id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    ValidationError,
    memory::MemoryStore,
    todo::Category,
  };

  fn draft(owner: &str, body: &str, category: &str) -> TodoDraft {
    TodoDraft {
      owner:    Some(owner.into()),
      status:   Some(true),
      body:     Some(body.into()),
      category: Some(category.into()),
    }
  }

  #[tokio::test]
  async fn add_then_get() {
    let store = MemoryStore::new();
    let id = add_todo(&store, draft("Jerry", "cool stuff", "homework")).await.unwrap();

    let todo = get_todo(&store, &id.to_hex()).await.unwrap();
    assert_eq!(todo.id, id);
    assert_eq!(todo.owner, "Jerry");
    assert_eq!(todo.body, "cool stuff");
    assert_eq!(todo.category, Category::Homework);
    assert!(todo.status);
  }

  #[tokio::test]
  async fn invalid_drafts_are_not_stored() {
    let store = MemoryStore::new();
    for (d, expected) in [
      (draft("Jerry", "", "homework"), ValidationError::EmptyBody),
      (draft("", "cool stuff", "homework"), ValidationError::EmptyOwner),
      (
        draft("Jerry", "cool stuff", "real category"),
        ValidationError::IllegalCategory(Some("real category".into())),
      ),
    ] {
      match add_todo(&store, d).await {
        Err(Error::ValidationFailed(e)) => assert_eq!(e, expected),
        other => panic!("expected validation failure, got {other:?}"),
      }
    }
    assert!(store.snapshot().unwrap().is_empty());
  }

  #[tokio::test]
  async fn get_with_malformed_id() {
    let store = MemoryStore::new();
    let err = get_todo(&store, "bad").await.unwrap_err();
    assert!(matches!(err, Error::MalformedIdentifier(ref s) if s == "bad"));
  }

  #[tokio::test]
  async fn get_with_absent_id() {
    let store = MemoryStore::new();
    let err = get_todo(&store, "588935f5c668650dc77df581").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(id) if id.to_hex() == "588935f5c668650dc77df581"));
  }

  #[tokio::test]
  async fn delete_succeeds_once() {
    let store = MemoryStore::new();
    let id = add_todo(&store, draft("Fry", "Bullfrog ranger", "homework")).await.unwrap();

    delete_todo(&store, &id.to_hex()).await.unwrap();
    assert!(matches!(get_todo(&store, &id.to_hex()).await, Err(Error::NotFound(_))));

    let err = delete_todo(&store, &id.to_hex()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(missing) if missing == id));
  }

  #[tokio::test]
  async fn delete_with_malformed_id() {
    let store = MemoryStore::new();
    let err = delete_todo(&store, "not-an-id").await.unwrap_err();
    assert!(matches!(err, Error::MalformedIdentifier(_)));
  }

  #[tokio::test]
  async fn store_failures_are_surfaced() {
    let store = MemoryStore::new();
    let id = add_todo(&store, draft("Rod", "Hunter", "video games")).await.unwrap();
    store.set_available(false);

    assert!(matches!(
      get_todo(&store, &id.to_hex()).await,
      Err(Error::StoreUnavailable(_))
    ));
    assert!(matches!(
      add_todo(&store, draft("Rod", "Hunter", "video games")).await,
      Err(Error::StoreUnavailable(_))
    ));
    assert!(matches!(
      delete_todo(&store, &id.to_hex()).await,
      Err(Error::StoreUnavailable(_))
    ));
  }
}
