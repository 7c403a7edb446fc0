//! KSB service. KSBs are leaves and carry no associations.

use crate::{
  id::{EntityKind, KsbId},
  model::{Ksb, KsbPatch, NewKsb, UniqueField, require_text},
  service::{ensure_vacant, not_found},
  tables::Tables,
  view::KsbView,
};

pub fn list<T: Tables>(tables: &T) -> Result<Vec<KsbView>, T::Error> {
  Ok(tables.ksbs()?.into_iter().map(KsbView::from).collect())
}

pub fn create<T: Tables>(tables: &mut T, input: NewKsb) -> Result<KsbView, T::Error> {
  require_text("ksb_name", &input.ksb_name)?;
  require_text("description", &input.description)?;

  ensure_vacant(tables.ksb_by(UniqueField::Name, &input.ksb_name)?, None, &input.ksb_name)?;
  ensure_vacant(
    tables.ksb_by(UniqueField::Description, &input.description)?,
    None,
    &input.description,
  )?;

  let ksb = Ksb {
    id:          KsbId::new(),
    ksb_name:    input.ksb_name,
    description: input.description,
  };
  tables.insert_ksb(&ksb)?;
  Ok(ksb.into())
}

pub fn get<T: Tables>(tables: &T, id: KsbId) -> Result<KsbView, T::Error> {
  Ok(fetch(tables, id)?.into())
}

pub fn update<T: Tables>(
  tables: &mut T,
  id: KsbId,
  patch: KsbPatch,
) -> Result<KsbView, T::Error> {
  let mut ksb = fetch(tables, id)?;

  if let Some(name) = patch.ksb_name {
    require_text("ksb_name", &name)?;
    ensure_vacant(tables.ksb_by(UniqueField::Name, &name)?, Some(id), &name)?;
    ksb.ksb_name = name;
  }
  if let Some(description) = patch.description {
    require_text("description", &description)?;
    ensure_vacant(
      tables.ksb_by(UniqueField::Description, &description)?,
      Some(id),
      &description,
    )?;
    ksb.description = description;
  }

  tables.update_ksb(&ksb)?;
  Ok(ksb.into())
}

pub fn delete<T: Tables>(tables: &mut T, id: KsbId) -> Result<(), T::Error> {
  fetch(tables, id)?;
  tables.delete_ksb(id)
}

fn fetch<T: Tables>(tables: &T, id: KsbId) -> Result<Ksb, T::Error> {
  tables
    .ksb(id)?
    .ok_or_else(|| not_found(EntityKind::Ksb, id.as_uuid()).into())
}
