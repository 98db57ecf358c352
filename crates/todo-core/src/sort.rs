//! Server-side sort order resolution.

use std::cmp::Ordering;

use crate::todo::{Todo, TodoField};

/// Field used when the client names none.
pub const DEFAULT_SORT_FIELD: &str = "owner";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending,
}

impl SortDirection {
  /// Only the exact token `"desc"` selects descending order.
  pub fn from_token(token: Option<&str>) -> Self {
    match token {
      Some("desc") => Self::Descending,
      _ => Self::Ascending,
    }
  }
}

/// The field a store orders by.
///
/// Names that are not todo fields are carried through untouched; stores
/// order such queries by insertion order alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
  Known(TodoField),
  Unknown(String),
}

impl SortField {
  pub fn from_name(name: &str) -> Self {
    TodoField::from_name(name)
      .map(Self::Known)
      .unwrap_or_else(|| Self::Unknown(name.to_owned()))
  }
}

/// A field plus a direction. Ties are always broken by insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
  pub field:     SortField,
  pub direction: SortDirection,
}

impl Default for SortOrder {
  fn default() -> Self { Self::resolve(None, None) }
}

impl SortOrder {
  pub fn resolve(field: Option<&str>, direction: Option<&str>) -> Self {
    Self {
      field:     SortField::from_name(field.unwrap_or(DEFAULT_SORT_FIELD)),
      direction: SortDirection::from_token(direction),
    }
  }

  /// Compare two todos under this order, without the insertion-order
  /// tie-break (a stable sort supplies it).
  pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
    let ord = match &self.field {
      SortField::Known(field) => field.compare(a, b),
      SortField::Unknown(_) => Ordering::Equal,
    };
    match self.direction {
      SortDirection::Ascending => ord,
      SortDirection::Descending => ord.reverse(),
    }
  }

  /// Stable in-place sort.
  pub fn sort(&self, todos: &mut [Todo]) { todos.sort_by(|a, b| self.compare(a, b)); }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{samples, todo::Category};

  fn bodies(todos: &[Todo]) -> Vec<&str> { todos.iter().map(|t| t.body.as_str()).collect() }

  #[test]
  fn defaults_to_owner_ascending() {
    let order = SortOrder::resolve(None, None);
    assert_eq!(order.field, SortField::Known(TodoField::Owner));
    assert_eq!(order.direction, SortDirection::Ascending);
    assert_eq!(order, SortOrder::default());
  }

  #[test]
  fn only_exact_desc_is_descending() {
    assert_eq!(SortDirection::from_token(Some("desc")), SortDirection::Descending);
    for token in [Some("DESC"), Some("asc"), Some("descending"), Some(""), None] {
      assert_eq!(SortDirection::from_token(token), SortDirection::Ascending, "{token:?}");
    }
  }

  #[test]
  fn unknown_field_is_passed_through() {
    let order = SortOrder::resolve(Some("name"), Some("desc"));
    assert_eq!(order.field, SortField::Unknown("name".into()));

    let mut todos = samples::three();
    let before = bodies(&todos).iter().map(|s| s.to_string()).collect::<Vec<_>>();
    order.sort(&mut todos);
    assert_eq!(bodies(&todos), before);
  }

  #[test]
  fn sorts_body_lexically() {
    let mut todos = samples::three();
    SortOrder::resolve(Some("body"), None).sort(&mut todos);
    assert_eq!(bodies(&todos), ["Frogs, are cool", "IBM is not cool", "UMM is cool"]);

    SortOrder::resolve(Some("body"), Some("desc")).sort(&mut todos);
    assert_eq!(bodies(&todos), ["UMM is cool", "IBM is not cool", "Frogs, are cool"]);
  }

  #[test]
  fn sorts_category_by_name() {
    let mut todos = samples::three();
    SortOrder::resolve(Some("category"), Some("asc")).sort(&mut todos);
    let categories: Vec<_> = todos.iter().map(|t| t.category).collect();
    assert_eq!(categories, [
      Category::Groceries,
      Category::Homework,
      Category::SoftwareDesign
    ]);
  }

  #[test]
  fn descending_keeps_insertion_order_for_ties() {
    let mut todos = vec![
      samples::todo("A", true, "first", Category::Homework),
      samples::todo("B", false, "second", Category::Homework),
      samples::todo("C", true, "third", Category::Homework),
    ];
    SortOrder::resolve(Some("status"), Some("desc")).sort(&mut todos);
    assert_eq!(bodies(&todos), ["first", "third", "second"]);
  }
}
