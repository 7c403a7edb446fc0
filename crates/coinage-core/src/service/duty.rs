//! Duty service. A duty owns a replaceable set of KSBs.

use crate::{
  id::{DutyId, EntityKind},
  model::{Duty, DutyPatch, NewDuty, UniqueField, require_text},
  resolve::resolve,
  service::{ensure_vacant, not_found},
  tables::Tables,
  view::{DutyView, duty_view},
};

pub fn list<T: Tables>(tables: &T) -> Result<Vec<DutyView>, T::Error> {
  tables
    .duties()?
    .into_iter()
    .map(|duty| duty_view(tables, duty))
    .collect()
}

pub fn create<T: Tables>(tables: &mut T, input: NewDuty) -> Result<DutyView, T::Error> {
  require_text("duty_name", &input.duty_name)?;
  require_text("description", &input.description)?;

  ensure_vacant(tables.duty_by(UniqueField::Name, &input.duty_name)?, None, &input.duty_name)?;
  ensure_vacant(
    tables.duty_by(UniqueField::Description, &input.description)?,
    None,
    &input.description,
  )?;

  let ksbs = match &input.ksb_names {
    Some(names) => resolve(names, |name| tables.ksb_by(UniqueField::Name, name))?,
    None => Vec::new(),
  };

  let duty = Duty {
    id:          DutyId::new(),
    duty_name:   input.duty_name,
    description: input.description,
  };
  tables.insert_duty(&duty)?;
  for ksb in &ksbs {
    tables.link_duty_ksb(duty.id, ksb.id)?;
  }

  duty_view(tables, duty)
}

pub fn get<T: Tables>(tables: &T, id: DutyId) -> Result<DutyView, T::Error> {
  let duty = fetch(tables, id)?;
  duty_view(tables, duty)
}

pub fn update<T: Tables>(
  tables: &mut T,
  id: DutyId,
  patch: DutyPatch,
) -> Result<DutyView, T::Error> {
  let mut duty = fetch(tables, id)?;

  if let Some(name) = patch.duty_name {
    require_text("duty_name", &name)?;
    ensure_vacant(tables.duty_by(UniqueField::Name, &name)?, Some(id), &name)?;
    duty.duty_name = name;
  }
  if let Some(description) = patch.description {
    require_text("description", &description)?;
    ensure_vacant(
      tables.duty_by(UniqueField::Description, &description)?,
      Some(id),
      &description,
    )?;
    duty.description = description;
  }

  // Resolve the whole replacement set before dropping the current one.
  let replacement = match &patch.ksb_names {
    Some(names) => Some(resolve(names, |name| tables.ksb_by(UniqueField::Name, name))?),
    None => None,
  };

  tables.update_duty(&duty)?;
  if let Some(ksbs) = replacement {
    tables.clear_duty_ksbs(id)?;
    for ksb in &ksbs {
      tables.link_duty_ksb(id, ksb.id)?;
    }
  }

  duty_view(tables, duty)
}

pub fn delete<T: Tables>(tables: &mut T, id: DutyId) -> Result<(), T::Error> {
  fetch(tables, id)?;
  tables.delete_duty(id)
}

fn fetch<T: Tables>(tables: &T, id: DutyId) -> Result<Duty, T::Error> {
  tables
    .duty(id)?
    .ok_or_else(|| not_found(EntityKind::Duty, id.as_uuid()).into())
}
