//! Association resolution: turning a list of names into stored entities.

use std::collections::HashSet;

use crate::{Error, model::Entity};

/// Resolve each name in `names` through `lookup`, in input order.
///
/// Stops at the first name with no stored entity and returns
/// [`Error::MissingReference`] for it; later names are not looked up. Names
/// that resolve to an entity already in the result are skipped, so the
/// returned list is a set in first-seen order.
pub fn resolve<T, E, F>(names: &[String], mut lookup: F) -> Result<Vec<T>, E>
where
  T: Entity,
  E: From<Error>,
  F: FnMut(&str) -> Result<Option<T>, E>,
{
  let mut seen = HashSet::with_capacity(names.len());
  let mut resolved = Vec::with_capacity(names.len());

  for name in names {
    let entity = lookup(name)?.ok_or_else(|| Error::MissingReference {
      kind: T::KIND,
      name: name.clone(),
    })?;
    if seen.insert(entity.id()) {
      resolved.push(entity);
    }
  }

  Ok(resolved)
}
