//! The todo record and its field vocabulary.

use std::{borrow::Cow, cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::id::TodoId;

// ─── Category ────────────────────────────────────────────────────────────────

/// The fixed set of todo categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  #[serde(rename = "groceries")]
  Groceries,
  #[serde(rename = "homework")]
  Homework,
  #[serde(rename = "software design")]
  SoftwareDesign,
  #[serde(rename = "video games")]
  VideoGames,
}

impl Category {
  pub const ALL: [Category; 4] = [
    Category::Groceries,
    Category::Homework,
    Category::SoftwareDesign,
    Category::VideoGames,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Groceries => "groceries",
      Self::Homework => "homework",
      Self::SoftwareDesign => "software design",
      Self::VideoGames => "video games",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Returned when a string names no [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
  type Err = UnknownCategory;

  /// Exact, case-sensitive match against the category names.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|c| c.as_str() == s)
      .ok_or_else(|| UnknownCategory(s.to_owned()))
  }
}

// ─── Todo ────────────────────────────────────────────────────────────────────

/// A persisted todo. Never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
  #[serde(rename = "_id")]
  pub id:       TodoId,
  pub owner:    String,
  pub status:   bool,
  pub body:     String,
  pub category: Category,
}

/// A todo that passed validation and has no identifier yet.
///
/// Only [`crate::validate::validate`] constructs these, so every value
/// handed to [`crate::store::TodoStore::insert`] satisfies the record
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
  pub(crate) owner:    String,
  pub(crate) status:   bool,
  pub(crate) body:     String,
  pub(crate) category: Category,
}

impl NewTodo {
  pub fn owner(&self) -> &str { &self.owner }

  pub fn status(&self) -> bool { self.status }

  pub fn body(&self) -> &str { &self.body }

  pub fn category(&self) -> Category { self.category }

  /// Attach a store-assigned identifier.
  pub fn into_todo(self, id: TodoId) -> Todo {
    Todo {
      id,
      owner: self.owner,
      status: self.status,
      body: self.body,
      category: self.category,
    }
  }
}

/// A candidate todo as submitted by a client. Every field is optional so that
/// a missing field surfaces as a validation failure rather than a
/// deserialisation error. A client-supplied `_id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub owner:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:   Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

// ─── Field vocabulary ────────────────────────────────────────────────────────

/// The addressable fields of a [`Todo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoField {
  Id,
  Owner,
  Status,
  Body,
  Category,
}

impl TodoField {
  /// Resolve a wire-level field name. Both `_id` and `id` name the
  /// identifier.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "_id" | "id" => Some(Self::Id),
      "owner" => Some(Self::Owner),
      "status" => Some(Self::Status),
      "body" => Some(Self::Body),
      "category" => Some(Self::Category),
      _ => None,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::Id => "_id",
      Self::Owner => "owner",
      Self::Status => "status",
      Self::Body => "body",
      Self::Category => "category",
    }
  }

  /// Text representation of this field on `todo`, as used by substring
  /// matching. The status renders as `"true"` or `"false"`.
  pub fn text(self, todo: &Todo) -> Cow<'_, str> {
    match self {
      Self::Id => Cow::Owned(todo.id.to_hex()),
      Self::Owner => Cow::Borrowed(&todo.owner),
      Self::Status => Cow::Borrowed(if todo.status { "true" } else { "false" }),
      Self::Body => Cow::Borrowed(&todo.body),
      Self::Category => Cow::Borrowed(todo.category.as_str()),
    }
  }

  /// Ascending comparison of two todos by this field. Text fields compare
  /// lexically, status orders `false` before `true`.
  pub fn compare(self, a: &Todo, b: &Todo) -> Ordering {
    match self {
      Self::Id => a.id.cmp(&b.id),
      Self::Owner => a.owner.cmp(&b.owner),
      Self::Status => a.status.cmp(&b.status),
      Self::Body => a.body.cmp(&b.body),
      Self::Category => a.category.as_str().cmp(b.category.as_str()),
    }
  }
}

impl fmt::Display for TodoField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_names_round_trip() {
    for c in Category::ALL {
      assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
    }
    assert!("Homework".parse::<Category>().is_err());
    assert!("real category".parse::<Category>().is_err());
  }

  #[test]
  fn todo_serializes_with_mongo_style_id() {
    let todo = Todo {
      id:       "588935f5c668650dc77df581".parse().unwrap(),
      owner:    "Fry".into(),
      status:   true,
      body:     "Bullfrog ranger".into(),
      category: Category::Homework,
    };
    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["_id"], "588935f5c668650dc77df581");
    assert_eq!(json["category"], "homework");
    assert_eq!(json["status"], true);
  }

  #[test]
  fn draft_ignores_client_id_and_tolerates_missing_fields() {
    let draft: TodoDraft = serde_json::from_str(
      r#"{"_id": "TestTodo", "status": true, "body": "cool stuff"}"#,
    )
    .unwrap();
    assert_eq!(draft.owner, None);
    assert_eq!(draft.status, Some(true));
    assert_eq!(draft.category, None);
  }

  #[test]
  fn status_text_is_boolean_literal() {
    let todo = crate::samples::todo("Jerry", true, "Prominent skier", Category::Groceries);
    assert_eq!(TodoField::Status.text(&todo), "true");
    assert_eq!(TodoField::Category.text(&todo), "groceries");
  }
}
