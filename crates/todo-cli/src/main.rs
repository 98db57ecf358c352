//! `todo`: command-line client for the todo API.
//!
//! # Usage
//!
//! ```text
//! todo list --owner fry --sort-by body --sort-order desc
//! todo list --status true --local-sort owner --limit 5
//! todo add --owner Fry --status false --body "Bullfrog ranger" --category homework
//! todo --url http://localhost:4567 delete 588935f5c668650dc77df581
//! ```

mod app;
mod client;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::{Browser, render_line};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use serde::Deserialize;
use todo_core::{filter::TodoFilter, refine::Refinement, todo::TodoDraft};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:4567";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "todo", about = "Command-line client for the todo API")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the todo server (default: http://localhost:4567).
  #[arg(long, env = "TODOS_URL")]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List todos, filtered and sorted by the server, then refined locally.
  List(ListArgs),

  /// Show a single todo.
  Get {
    id: String,

    /// Print JSON instead of a text line.
    #[arg(long)]
    json: bool,
  },

  /// Create a todo and print its id.
  Add {
    #[arg(long)]
    owner:    Option<String>,
    #[arg(long)]
    status:   Option<bool>,
    #[arg(long)]
    body:     Option<String>,
    #[arg(long)]
    category: Option<String>,
  },

  /// Delete a todo.
  Delete { id: String },
}

#[derive(clap::Args, Debug)]
struct ListArgs {
  // Sent to the server: case-insensitive substring matches.
  #[arg(long)]
  owner:      Option<String>,
  #[arg(long)]
  status:     Option<String>,
  #[arg(long)]
  body:       Option<String>,
  #[arg(long)]
  category:   Option<String>,
  #[arg(long)]
  sort_by:    Option<String>,
  /// `desc` for descending; anything else sorts ascending.
  #[arg(long)]
  sort_order: Option<String>,

  // Applied locally to the fetched list: case-sensitive.
  #[arg(long)]
  local_owner:    Option<String>,
  #[arg(long)]
  local_status:   Option<bool>,
  #[arg(long)]
  local_body:     Option<String>,
  #[arg(long)]
  local_category: Option<String>,
  /// `owner`, `category` or `body`.
  #[arg(long)]
  local_sort:     Option<String>,
  /// Keep at most this many; zero or negative keeps all.
  #[arg(long, allow_hyphen_values = true)]
  limit:          Option<i64>,

  /// Print JSON instead of text lines.
  #[arg(long)]
  json: bool,
}

impl ListArgs {
  fn split(self) -> (TodoFilter, Refinement, bool) {
    let filter = TodoFilter {
      owner:      self.owner,
      status:     self.status,
      body:       self.body,
      category:   self.category,
      sort_by:    self.sort_by,
      sort_order: self.sort_order,
    };
    let refinement = Refinement {
      owner:    self.local_owner,
      status:   self.local_status,
      body:     self.local_body,
      category: self.local_category,
      limit:    self.limit,
      sort_by:  self.local_sort,
    };
    (filter, refinement, self.json)
  }
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| DEFAULT_URL.to_string()),
  };
  let client = ApiClient::new(api_config)?;

  match args.command {
    Command::List(list) => {
      let (filter, refinement, json) = list.split();
      let mut browser = Browser::new();
      browser.fetch(&client, filter).await?;
      let todos = browser.view(&refinement);
      tracing::debug!(filter = ?browser.filter, shown = todos.len(), "refined view");
      if json {
        println!("{}", serde_json::to_string_pretty(&todos)?);
      } else {
        for todo in &todos {
          println!("{}", render_line(todo));
        }
      }
    }
    Command::Get { id, json } => {
      let todo = client.get_todo(&id).await?;
      if json {
        println!("{}", serde_json::to_string_pretty(&todo)?);
      } else {
        println!("{}", render_line(&todo));
      }
    }
    Command::Add { owner, status, body, category } => {
      let draft = TodoDraft { owner, status, body, category };
      let id = client.add_todo(&draft).await?;
      println!("{id}");
    }
    Command::Delete { id } => {
      client.delete_todo(&id).await?;
      println!("deleted {id}");
    }
  }

  Ok(())
}
