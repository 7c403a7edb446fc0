//! Entity records and the request payloads that create or modify them.
//!
//! Records carry scalar columns only. Association sets (Coin → Duty,
//! Duty → KSB) live in the join tables and are assembled on read by
//! [`crate::view`].

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  id::{CoinId, DutyId, EntityKind, KsbId},
};

// ─── Records ─────────────────────────────────────────────────────────────────

/// A Knowledge, Skill or Behaviour entry. Leaf entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ksb {
  pub id:          KsbId,
  pub ksb_name:    String,
  pub description: String,
}

/// A task description; owns a set of KSBs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duty {
  pub id:          DutyId,
  pub duty_name:   String,
  pub description: String,
}

/// A credential or milestone; owns a set of duties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
  pub id:        CoinId,
  pub coin_name: String,
}

/// Behaviour shared by every stored record.
pub trait Entity {
  const KIND: EntityKind;
  type Id: Copy + Eq + Hash;

  fn id(&self) -> Self::Id;
}

impl Entity for Ksb {
  const KIND: EntityKind = EntityKind::Ksb;
  type Id = KsbId;

  fn id(&self) -> KsbId { self.id }
}

impl Entity for Duty {
  const KIND: EntityKind = EntityKind::Duty;
  type Id = DutyId;

  fn id(&self) -> DutyId { self.id }
}

impl Entity for Coin {
  const KIND: EntityKind = EntityKind::Coin;
  type Id = CoinId;

  fn id(&self) -> CoinId { self.id }
}

/// Unique columns that can be used for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
  Name,
  Description,
}

// ─── Payloads ────────────────────────────────────────────────────────────────

/// Body of `POST /ksb`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewKsb {
  pub ksb_name:    String,
  pub description: String,
}

/// Body of `PUT /ksb/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KsbPatch {
  pub ksb_name:    Option<String>,
  pub description: Option<String>,
}

/// Body of `POST /duty`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewDuty {
  pub duty_name:   String,
  pub description: String,
  /// Names of existing KSBs to associate.
  #[serde(default)]
  pub ksb_names:   Option<Vec<String>>,
}

/// Body of `PUT /duty/{id}`. A present `ksb_names` replaces the whole set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DutyPatch {
  pub duty_name:   Option<String>,
  pub description: Option<String>,
  pub ksb_names:   Option<Vec<String>>,
}

/// Body of `POST /coin`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewCoin {
  pub coin_name:  String,
  /// Names of existing duties to associate.
  #[serde(default)]
  pub duty_names: Option<Vec<String>>,
}

/// Body of `PUT /coin/{id}`. A present `duty_names` replaces the whole set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoinPatch {
  pub coin_name:  Option<String>,
  pub duty_names: Option<Vec<String>>,
}

/// Reject blank values for a required text column.
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::InvalidInput(format!("{field} must not be empty")));
  }
  Ok(())
}
