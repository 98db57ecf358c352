//! Server-side filter construction.
//!
//! A [`TodoFilter`] is the structured form of the list endpoint's free-text
//! query parameters. [`Predicate::from_filter`] turns it into a composable
//! predicate that stores either evaluate directly ([`Predicate::matches`]) or
//! compile into their own query language.

use serde::{Deserialize, Serialize};

use crate::todo::{Todo, TodoField};

// ─── Request-side filter ─────────────────────────────────────────────────────

/// Optional list parameters, exactly as the client sent them.
///
/// A key that is present with an empty value is still present: it constrains
/// nothing, since every field contains the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilter {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner:      Option<String>,
  /// Matched against `"true"`/`"false"`, not parsed as a boolean.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category:   Option<String>,
  #[serde(default, rename = "sortby", skip_serializing_if = "Option::is_none")]
  pub sort_by:    Option<String>,
  #[serde(default, rename = "sortorder", skip_serializing_if = "Option::is_none")]
  pub sort_order: Option<String>,
}

impl TodoFilter {
  /// The present filter keys, in a fixed field order.
  pub fn terms(&self) -> impl Iterator<Item = (TodoField, &str)> {
    [
      (TodoField::Owner, &self.owner),
      (TodoField::Status, &self.status),
      (TodoField::Body, &self.body),
      (TodoField::Category, &self.category),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
  }
}

// ─── Predicate ───────────────────────────────────────────────────────────────

/// A boolean rule over todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
  /// Matches every todo.
  Always,
  /// Case-insensitive, unanchored substring match of `needle` within the
  /// field's text.
  Contains { field: TodoField, needle: String },
  /// Conjunction; an empty conjunction matches everything.
  And(Vec<Predicate>),
}

impl Predicate {
  pub fn contains(field: TodoField, needle: impl Into<String>) -> Self {
    Self::Contains { field, needle: needle.into() }
  }

  /// Build the conjunction of one substring match per present filter key.
  pub fn from_filter(filter: &TodoFilter) -> Self {
    let mut terms: Vec<Predicate> = filter
      .terms()
      .map(|(field, value)| Self::contains(field, value))
      .collect();

    match terms.len() {
      0 => Self::Always,
      1 => terms.remove(0),
      _ => Self::And(terms),
    }
  }

  pub fn matches(&self, todo: &Todo) -> bool {
    match self {
      Self::Always => true,
      Self::Contains { field, needle } => contains_ci(&field.text(todo), needle),
      Self::And(terms) => terms.iter().all(|t| t.matches(todo)),
    }
  }
}

/// Case-insensitive substring test shared by every store so that in-memory
/// and database evaluation agree.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}
