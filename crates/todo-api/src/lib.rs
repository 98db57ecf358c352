//! JSON REST API for todos.
//!
//! Exposes an axum [`Router`] backed by any [`todo_core::store::TodoStore`].
//! Routes are declared as a [`Controller`] route table and mounted onto the
//! hosting router; auth, TLS, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", todo_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod todos;

use std::{marker::PhantomData, sync::Arc};

use axum::{
  Router,
  handler::Handler,
  routing::{MethodFilter, MethodRouter, on},
};
use todo_core::store::TodoStore;

pub use error::ApiError;

// ─── Route table ──────────────────────────────────────────────────────────────

/// One `{method, path, handler}` entry of a route table.
pub struct Route<St> {
  pub method:  MethodFilter,
  pub path:    &'static str,
  pub handler: MethodRouter<St>,
}

impl<St> Route<St>
where
  St: Clone + Send + Sync + 'static,
{
  pub fn on<H, T>(method: MethodFilter, path: &'static str, handler: H) -> Self
  where
    H: Handler<T, St>,
    T: 'static,
  {
    Self { method, path, handler: on(method, handler) }
  }
}

/// Something that exposes a route table for a hosting router to consume.
pub trait Controller {
  type State: Clone + Send + Sync + 'static;

  fn routes(&self) -> Vec<Route<Self::State>>;
}

/// Register every route of `controller` on `router`. Entries sharing a path
/// are merged into one method router.
pub fn mount<C>(router: Router<C::State>, controller: &C) -> Router<C::State>
where
  C: Controller,
{
  controller
    .routes()
    .into_iter()
    .fold(router, |router, route| router.route(route.path, route.handler))
}

// ─── Todo controller ──────────────────────────────────────────────────────────

/// Route table for the `/todos` collection.
pub struct TodoController<S> {
  _store: PhantomData<fn() -> S>,
}

impl<S> TodoController<S> {
  pub fn new() -> Self { Self { _store: PhantomData } }
}

impl<S> Default for TodoController<S> {
  fn default() -> Self { Self::new() }
}

impl<S> Controller for TodoController<S>
where
  S: TodoStore + 'static,
{
  type State = Arc<S>;

  fn routes(&self) -> Vec<Route<Arc<S>>> {
    vec![
      Route::on(MethodFilter::GET, "/todos/{id}", todos::get_one::<S>),
      Route::on(MethodFilter::GET, "/todos", todos::list::<S>),
      Route::on(MethodFilter::DELETE, "/todos/{id}", todos::delete_one::<S>),
      Route::on(MethodFilter::POST, "/todos", todos::create::<S>),
    ]
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TodoStore + 'static,
{
  mount(Router::new(), &TodoController::<S>::new()).with_state(store)
}

// ─── Router tests ─────────────────────────────────────────────────────────────
