//! Entity services: create, read, update and delete per entity kind.
//!
//! Every function takes a [`Tables`](crate::tables::Tables) scoped to a single
//! transaction and either completes all of its writes or returns an error
//! before the caller commits. Association lists are resolved before any link
//! is touched, so a missing reference never leaves a half-replaced set behind.

pub mod coin;
pub mod duty;
pub mod ksb;

use uuid::Uuid;

use crate::{Error, Result, id::EntityKind, model::Entity};

/// Fail with [`Error::AlreadyExists`] when `existing` is a row other than
/// `owner` holding `value` in a unique column.
pub(crate) fn ensure_vacant<E: Entity>(
  existing: Option<E>,
  owner: Option<E::Id>,
  value: &str,
) -> Result<()> {
  match existing {
    Some(row) if Some(row.id()) != owner => Err(Error::AlreadyExists {
      kind:  E::KIND,
      value: value.to_owned(),
    }),
    _ => Ok(()),
  }
}

pub(crate) fn not_found(kind: EntityKind, id: Uuid) -> Error { Error::NotFound { kind, id } }
