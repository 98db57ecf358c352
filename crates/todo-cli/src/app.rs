//! Fetched-list state and its local views.

use anyhow::Result;
use todo_core::{
  filter::TodoFilter,
  refine::Refinement,
  todo::Todo,
};

use crate::client::ApiClient;

// ─── Browser ──────────────────────────────────────────────────────────────────

/// The most recent list fetched from the server, plus the filter that
/// produced it. Local refinements are views over this list and never
/// trigger a refetch.
#[derive(Debug, Default)]
pub struct Browser {
  /// Server-side filter of the last fetch.
  pub filter: TodoFilter,

  /// Todos in the order the server returned them.
  pub todos: Vec<Todo>,
}

impl Browser {
  pub fn new() -> Self { Self::default() }

  /// Replace the held list with a fresh fetch for `filter`.
  pub async fn fetch(&mut self, client: &ApiClient, filter: TodoFilter) -> Result<&[Todo]> {
    let todos = client.list_todos(&filter).await?;
    tracing::debug!(count = todos.len(), ?filter, "fetched todos");
    self.filter = filter;
    self.todos = todos;
    Ok(&self.todos)
  }

  /// Apply `refinement` to the held list. The held list is left as fetched.
  pub fn view(&self, refinement: &Refinement) -> Vec<Todo> { refinement.apply(&self.todos) }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

/// One line per todo: id, done marker, owner, category, body.
pub fn render_line(todo: &Todo) -> String {
  let done = if todo.status { "[x]" } else { "[ ]" };
  format!(
    "{}  {done}  {:<12}  {:<15}  {}",
    todo.id, todo.owner, todo.category.as_str(), todo.body
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use todo_core::{TodoId, todo::Category};

  fn todo(owner: &str, status: bool, body: &str, category: Category) -> Todo {
    Todo {
      id: TodoId::generate(),
      owner: owner.into(),
      status,
      body: body.into(),
      category,
    }
  }

  fn browser() -> Browser {
    Browser {
      filter: TodoFilter::default(),
      todos:  vec![
        todo("Chris", true, "UMM is cool", Category::SoftwareDesign),
        todo("Pat", false, "IBM is not cool", Category::Homework),
        todo("Jamie", true, "Frogs, are cool", Category::Groceries),
      ],
    }
  }

  fn owners(todos: &[Todo]) -> Vec<&str> { todos.iter().map(|t| t.owner.as_str()).collect() }

  #[test]
  fn views_do_not_disturb_the_fetched_list() {
    let b = browser();
    let sorted = b.view(&Refinement {
      sort_by: Some("owner".into()),
      ..Refinement::default()
    });
    assert_eq!(owners(&sorted), ["Chris", "Jamie", "Pat"]);
    assert_eq!(owners(&b.todos), ["Chris", "Pat", "Jamie"]);
  }

  #[test]
  fn successive_views_start_from_the_fetch() {
    let b = browser();
    let done = b.view(&Refinement {
      status: Some(true),
      ..Refinement::default()
    });
    assert_eq!(owners(&done), ["Chris", "Jamie"]);

    let first = b.view(&Refinement {
      limit: Some(1),
      ..Refinement::default()
    });
    assert_eq!(owners(&first), ["Chris"]);
  }

  #[test]
  fn render_line_shows_status_and_category() {
    let t = todo("Pat", false, "IBM is not cool", Category::SoftwareDesign);
    let line = render_line(&t);
    assert!(line.starts_with(&t.id.to_hex()), "{line}");
    assert!(line.contains("[ ]"), "{line}");
    assert!(line.contains("software design"), "{line}");
    assert!(line.ends_with("IBM is not cool"), "{line}");
  }
}
