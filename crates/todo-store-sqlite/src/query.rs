//! Compilation of [`TodoQuery`] into a SQL `WHERE`/`ORDER BY` pair.
//!
//! Only column names from the fixed field vocabulary ever reach the SQL text;
//! every user-supplied value is bound as a parameter.

use todo_core::{
  filter::Predicate,
  sort::{SortDirection, SortField, SortOrder},
  store::TodoQuery,
  todo::TodoField,
};

use crate::schema::CONTAINS_CI;

/// A compiled query: SQL fragment plus positional parameters.
#[derive(Debug, PartialEq, Eq)]
pub struct CompiledQuery {
  pub where_clause: String,
  pub order_clause: String,
  pub params:       Vec<String>,
}

impl CompiledQuery {
  pub fn new(query: &TodoQuery) -> Self {
    let mut params = Vec::new();
    let where_clause = compile_predicate(&query.predicate, &mut params);
    Self {
      where_clause,
      order_clause: compile_order(&query.order),
      params,
    }
  }
}

/// SQL expression yielding the text a field is matched against.
fn field_expr(field: TodoField) -> &'static str {
  match field {
    TodoField::Id => "todo_id",
    TodoField::Owner => "owner",
    TodoField::Status => "CASE status WHEN 1 THEN 'true' ELSE 'false' END",
    TodoField::Body => "body",
    TodoField::Category => "category",
  }
}

/// SQL expression a field sorts by.
fn sort_expr(field: TodoField) -> &'static str {
  match field {
    TodoField::Status => "status",
    other => field_expr(other),
  }
}

fn compile_predicate(predicate: &Predicate, params: &mut Vec<String>) -> String {
  match predicate {
    Predicate::Always => "1".to_owned(),
    Predicate::Contains { field, needle } => {
      params.push(needle.clone());
      format!("{CONTAINS_CI}({}, ?{})", field_expr(*field), params.len())
    }
    Predicate::And(terms) if terms.is_empty() => "1".to_owned(),
    Predicate::And(terms) => {
      let parts: Vec<String> = terms
        .iter()
        .map(|t| format!("({})", compile_predicate(t, params)))
        .collect();
      parts.join(" AND ")
    }
  }
}

fn compile_order(order: &SortOrder) -> String {
  match &order.field {
    SortField::Known(field) => {
      let dir = match order.direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
      };
      format!("{} {dir}, rowid ASC", sort_expr(*field))
    }
    SortField::Unknown(_) => "rowid ASC".to_owned(),
  }
}
