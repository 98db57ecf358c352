//! Async HTTP client wrapping the todo JSON API.

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::time::Duration;
use todo_core::{
  TodoId,
  filter::TodoFilter,
  todo::{Todo, TodoDraft},
};

/// Connection settings for the todo API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the todo JSON REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

#[derive(Deserialize)]
struct Created {
  id: TodoId,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  /// `<base_url>/api/<segments..>`, each segment percent-encoded.
  fn url(&self, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(&self.config.base_url)
      .with_context(|| format!("invalid base url {:?}", self.config.base_url))?;
    url
      .path_segments_mut()
      .map_err(|_| anyhow!("base url {:?} cannot carry a path", self.config.base_url))?
      .pop_if_empty()
      .push("api")
      .extend(segments);
    Ok(url)
  }

  /// Pass successful responses through; turn anything else into an error
  /// carrying the server's `{"error": ...}` message when there is one.
  async fn expect_success(resp: Response, what: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    match resp.json::<ErrorBody>().await {
      Ok(body) => Err(anyhow!("{what} → {status}: {}", body.error)),
      Err(_) => Err(anyhow!("{what} → {status}")),
    }
  }

  /// `GET /api/todos[?owner=..&status=..&body=..&category=..&sortby=..&sortorder=..]`
  pub async fn list_todos(&self, filter: &TodoFilter) -> Result<Vec<Todo>> {
    let resp = self
      .client
      .get(self.url(&["todos"])?)
      .query(filter)
      .send()
      .await
      .context("GET /todos failed")?;

    Self::expect_success(resp, "GET /todos")
      .await?
      .json()
      .await
      .context("deserialising todos")
  }

  /// `GET /api/todos/{id}`
  ///
  /// The id is sent as a single escaped path segment so the server decides
  /// whether it is well-formed.
  pub async fn get_todo(&self, id: &str) -> Result<Todo> {
    let resp = self
      .client
      .get(self.url(&["todos", id])?)
      .send()
      .await
      .with_context(|| format!("GET /todos/{id} failed"))?;

    Self::expect_success(resp, &format!("GET /todos/{id}"))
      .await?
      .json()
      .await
      .context("deserialising todo")
  }

  /// `POST /api/todos`
  pub async fn add_todo(&self, draft: &TodoDraft) -> Result<TodoId> {
    let resp = self
      .client
      .post(self.url(&["todos"])?)
      .json(draft)
      .send()
      .await
      .context("POST /todos failed")?;

    let created: Created = Self::expect_success(resp, "POST /todos")
      .await?
      .json()
      .await
      .context("deserialising created id")?;
    Ok(created.id)
  }

  /// `DELETE /api/todos/{id}`
  pub async fn delete_todo(&self, id: &str) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&["todos", id])?)
      .send()
      .await
      .with_context(|| format!("DELETE /todos/{id} failed"))?;

    Self::expect_success(resp, &format!("DELETE /todos/{id}")).await?;
    Ok(())
  }
}
