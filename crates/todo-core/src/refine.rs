//! Client-side refinement of an already-fetched todo list.
//!
//! Unlike the server-side [`crate::filter::Predicate`], substring filters
//! here are case-sensitive and status is compared as a boolean. Sorting is
//! ascending only. Nothing in this module touches a store.

use serde::{Deserialize, Serialize};

use crate::todo::{Todo, TodoField};

/// A second filter/sort/limit pass over a fetched list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
  pub owner:    Option<String>,
  pub status:   Option<bool>,
  pub body:     Option<String>,
  pub category: Option<String>,
  /// Keep at most this many todos; zero or negative keeps all.
  pub limit:    Option<i64>,
  /// `owner`, `category` or `body`; any other name leaves the order alone.
  pub sort_by:  Option<String>,
}

impl Refinement {
  /// Filter, then sort, then truncate. Returns a new list; `todos` is left
  /// untouched.
  pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
    let mut out: Vec<Todo> = todos
      .iter()
      .filter(|t| self.keeps(t))
      .cloned()
      .collect();

    if let Some(field) = self.sort_by.as_deref().and_then(sort_field) {
      out.sort_by(|a, b| field.compare(a, b));
    }

    if let Some(limit) = self.limit
      && limit > 0
    {
      out.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    out
  }

  fn keeps(&self, todo: &Todo) -> bool {
    let substring = |needle: &Option<String>, field: TodoField| {
      needle
        .as_deref()
        .is_none_or(|n| field.text(todo).contains(n))
    };

    substring(&self.owner, TodoField::Owner)
      && substring(&self.body, TodoField::Body)
      && substring(&self.category, TodoField::Category)
      && self.status.is_none_or(|s| todo.status == s)
  }
}

fn sort_field(name: &str) -> Option<TodoField> {
  match name {
    "owner" => Some(TodoField::Owner),
    "category" => Some(TodoField::Category),
    "body" => Some(TodoField::Body),
    _ => None,
  }
}

/// Free-function form of [`Refinement::apply`].
pub fn refine(todos: &[Todo], refinement: &Refinement) -> Vec<Todo> { refinement.apply(todos) }
