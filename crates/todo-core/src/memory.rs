//! In-memory implementation of [`TodoStore`] for tests and development.

use std::sync::{
  Arc, RwLock,
  atomic::{AtomicBool, Ordering},
};

use thiserror::Error;

use crate::{
  id::TodoId,
  store::{TodoQuery, TodoStore},
  todo::{NewTodo, Todo},
};

#[derive(Debug, Error)]
pub enum MemoryStoreError {
  #[error("store is unavailable")]
  Unavailable,

  #[error("store lock poisoned")]
  Poisoned,
}

/// A todo collection held in a `Vec`, in insertion order.
///
/// Cloning is cheap and clones share the same collection. The store can be
/// switched off with [`MemoryStore::set_available`] to simulate an
/// unreachable backend.
#[derive(Clone, Default)]
pub struct MemoryStore {
  todos:       Arc<RwLock<Vec<Todo>>>,
  unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Build a store that already holds `todos`, in order.
  pub fn with_todos(todos: Vec<Todo>) -> Self {
    Self {
      todos:       Arc::new(RwLock::new(todos)),
      unavailable: Arc::default(),
    }
  }

  pub fn set_available(&self, available: bool) {
    self.unavailable.store(!available, Ordering::SeqCst);
  }

  /// Copy of the whole collection in insertion order.
  pub fn snapshot(&self) -> Result<Vec<Todo>, MemoryStoreError> {
    self.check()?;
    let todos = self.todos.read().map_err(|_| MemoryStoreError::Poisoned)?;
    Ok(todos.clone())
  }

  fn check(&self) -> Result<(), MemoryStoreError> {
    if self.unavailable.load(Ordering::SeqCst) {
      Err(MemoryStoreError::Unavailable)
    } else {
      Ok(())
    }
  }
}

impl TodoStore for MemoryStore {
  type Error = MemoryStoreError;

  async fn find(&self, query: &TodoQuery) -> Result<Vec<Todo>, MemoryStoreError> {
    self.check()?;
    let mut matched: Vec<Todo> = {
      let todos = self.todos.read().map_err(|_| MemoryStoreError::Poisoned)?;
      todos
        .iter()
        .filter(|t| query.predicate.matches(t))
        .cloned()
        .collect()
    };
    query.order.sort(&mut matched);
    Ok(matched)
  }

  async fn get(&self, id: TodoId) -> Result<Option<Todo>, MemoryStoreError> {
    self.check()?;
    let todos = self.todos.read().map_err(|_| MemoryStoreError::Poisoned)?;
    Ok(todos.iter().find(|t| t.id == id).cloned())
  }

  async fn insert(&self, todo: NewTodo) -> Result<TodoId, MemoryStoreError> {
    self.check()?;
    let id = TodoId::generate();
    let mut todos = self.todos.write().map_err(|_| MemoryStoreError::Poisoned)?;
    todos.push(todo.into_todo(id));
    Ok(id)
  }

  async fn delete(&self, id: TodoId) -> Result<bool, MemoryStoreError> {
    self.check()?;
    let mut todos = self.todos.write().map_err(|_| MemoryStoreError::Poisoned)?;
    match todos.iter().position(|t| t.id == id) {
      Some(index) => {
        todos.remove(index);
        Ok(true)
      }
      None => Ok(false),
    }
  }
}
