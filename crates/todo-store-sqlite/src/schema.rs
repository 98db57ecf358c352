//! SQL schema for the todos SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The implicit `rowid` records insertion order and breaks sort ties.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS todos (
    todo_id   TEXT PRIMARY KEY,   -- 24 lower-case hex characters
    owner     TEXT NOT NULL,
    status    INTEGER NOT NULL CHECK (status IN (0, 1)),
    body      TEXT NOT NULL,
    category  TEXT NOT NULL       -- 'groceries' | 'homework' | 'software design' | 'video games'
);

PRAGMA user_version = 1;
";

/// Name of the case-insensitive substring function registered on every
/// connection.
pub const CONTAINS_CI: &str = "contains_ci";
