//! Error types for `coinage-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::id::EntityKind;

#[derive(Debug, Error)]
pub enum Error {
  /// A unique column already holds this value.
  #[error("{kind} already exists: {value:?}")]
  AlreadyExists { kind: EntityKind, value: String },

  #[error("{kind} not found: {id}")]
  NotFound { kind: EntityKind, id: Uuid },

  /// An association list named an entity that is not in the store.
  #[error("{kind} not found: {name:?}")]
  MissingReference { kind: EntityKind, name: String },

  #[error("invalid input: {0}")]
  InvalidInput(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
