//! Core types and query logic for the todos service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::TodoStore`]; the API and CLI crates
//! drive the query, refinement and lifecycle functions defined here.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod filter;
pub mod id;
pub mod lifecycle;
pub mod memory;
pub mod refine;
pub mod sort;
pub mod store;
pub mod todo;
pub mod validate;

pub use error::{Error, Result};
pub use id::{ParseIdError, TodoId};
pub use validate::ValidationError;

#[cfg(test)]
pub(crate) mod samples;
