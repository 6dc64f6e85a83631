//! Error type for `rideboard-store`.
//!
//! The store never surfaces these to callers: expected conditions
//! (not-found, capacity violation) are `Option` returns, and persistence
//! faults are logged and swallowed at the boundary. The type exists so the
//! internal persistence layer has something precise to log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("storage adapter error: {0}")]
  Adapter(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
