//! Todo identifiers.
//!
//! A [`TodoId`] is a 12-byte object identifier: a 4-byte big-endian creation
//! timestamp (seconds), 5 random bytes and a 3-byte counter. Its text form is
//! 24 hexadecimal characters, rendered lower-case.

use std::{
  fmt,
  str::FromStr,
  sync::{
    OnceLock,
    atomic::{AtomicU32, Ordering},
  },
};

use chrono::Utc;
use rand_core::{OsRng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Byte length of a [`TodoId`].
pub const ID_LEN: usize = 12;

/// A store-assigned, immutable todo identifier.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TodoId([u8; ID_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected 24 hexadecimal characters, got {0:?}")]
pub struct ParseIdError(pub String);

impl TodoId {
  /// Generate a fresh identifier.
  ///
  /// Identifiers generated by one process are unique: the counter advances on
  /// every call and wraps only after 2^24 ids within the same second.
  pub fn generate() -> Self {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| AtomicU32::new(OsRng.next_u32()));

    let mut bytes = [0u8; ID_LEN];
    let secs = Utc::now().timestamp() as u32;
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    OsRng.fill_bytes(&mut bytes[4..9]);
    let count = counter.fetch_add(1, Ordering::Relaxed);
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
    Self(bytes)
  }

  pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self { Self(bytes) }

  pub fn as_bytes(&self) -> &[u8; ID_LEN] { &self.0 }

  /// Lower-case 24-character hex form.
  pub fn to_hex(&self) -> String { hex::encode(self.0) }
}

impl FromStr for TodoId {
  type Err = ParseIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.len() != ID_LEN * 2 {
      return Err(ParseIdError(s.to_owned()));
    }
    let mut bytes = [0u8; ID_LEN];
    hex::decode_to_slice(s, &mut bytes).map_err(|_| ParseIdError(s.to_owned()))?;
    Ok(Self(bytes))
  }
}

impl fmt::Display for TodoId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

impl TryFrom<String> for TodoId {
  type Error = ParseIdError;

  fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<TodoId> for String {
  fn from(id: TodoId) -> Self { id.to_hex() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_well_formed_hex() {
    let id: TodoId = "588935f5c668650dc77df581".parse().unwrap();
    assert_eq!(id.to_string(), "588935f5c668650dc77df581");
  }

  #[test]
  fn parse_accepts_upper_case_and_renders_lower() {
    let id: TodoId = "588935F5C668650DC77DF581".parse().unwrap();
    assert_eq!(id.to_hex(), "588935f5c668650dc77df581");
  }

  #[test]
  fn rejects_malformed_input() {
    for bad in ["bad", "", "588935f5c668650dc77df58", "588935f5c668650dc77df58z"] {
      assert!(bad.parse::<TodoId>().is_err(), "{bad:?} should not parse");
    }
  }

  #[test]
  fn generated_ids_are_distinct_and_round_trip() {
    let a = TodoId::generate();
    let b = TodoId::generate();
    assert_ne!(a, b);
    assert_eq!(a.to_hex().parse::<TodoId>().unwrap(), a);
  }

  #[test]
  fn serializes_as_hex_string() {
    let id: TodoId = "588935f5c668650dc77df581".parse().unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"588935f5c668650dc77df581\"");
    let back: TodoId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
  }
}
