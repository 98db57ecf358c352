//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Ids are stored as lower-case hex, categories by name, status as 0/1.

use todo_core::{
  TodoId,
  todo::{Category, Todo},
};

use crate::Result;

pub fn encode_id(id: TodoId) -> String { id.to_hex() }

pub fn decode_id(s: &str) -> Result<TodoId> { Ok(s.parse()?) }

pub fn encode_category(c: Category) -> &'static str { c.as_str() }

pub fn decode_category(s: &str) -> Result<Category> { Ok(s.parse()?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawTodo::from_row`].
pub const TODO_COLUMNS: &str = "todo_id, owner, status, body, category";

/// Raw values read directly from a `todos` row.
pub struct RawTodo {
  pub todo_id:  String,
  pub owner:    String,
  pub status:   bool,
  pub body:     String,
  pub category: String,
}

impl RawTodo {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      todo_id:  row.get(0)?,
      owner:    row.get(1)?,
      status:   row.get(2)?,
      body:     row.get(3)?,
      category: row.get(4)?,
    })
  }

  pub fn into_todo(self) -> Result<Todo> {
    Ok(Todo {
      id:       decode_id(&self.todo_id)?,
      owner:    self.owner,
      status:   self.status,
      body:     self.body,
      category: decode_category(&self.category)?,
    })
  }
}
