//! Shared fixtures for unit tests.

use crate::{
  id::TodoId,
  todo::{Category, Todo},
};

pub fn todo(owner: &str, status: bool, body: &str, category: Category) -> Todo {
  Todo {
    id: TodoId::generate(),
    owner: owner.into(),
    status,
    body: body.into(),
    category,
  }
}

/// Chris, Pat and Jamie, in that order.
pub fn three() -> Vec<Todo> {
  vec![
    todo("Chris", true, "UMM is cool", Category::SoftwareDesign),
    todo("Pat", false, "IBM is not cool", Category::Homework),
    todo("Jamie", true, "Frogs, are cool", Category::Groceries),
  ]
}
