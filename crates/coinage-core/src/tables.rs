//! The `Tables` trait: row-level access to the three entity tables and the
//! two join tables.
//!
//! A `Tables` value is always scoped to one store transaction. The services in
//! [`crate::service`] are written against this trait, so every service call is
//! all-or-nothing as long as the backend only commits when the call returns
//! `Ok`.

use crate::{
  Error,
  id::{CoinId, DutyId, KsbId},
  model::{Coin, Duty, Ksb, UniqueField},
};

pub trait Tables {
  type Error: std::error::Error + From<Error>;

  // ── KSBs ──────────────────────────────────────────────────────────────

  /// All KSBs in insertion order.
  fn ksbs(&self) -> Result<Vec<Ksb>, Self::Error>;

  fn ksb(&self, id: KsbId) -> Result<Option<Ksb>, Self::Error>;

  fn ksb_by(&self, field: UniqueField, value: &str) -> Result<Option<Ksb>, Self::Error>;

  fn insert_ksb(&mut self, ksb: &Ksb) -> Result<(), Self::Error>;

  fn update_ksb(&mut self, ksb: &Ksb) -> Result<(), Self::Error>;

  /// Remove the row and every `duty_ksb` link pointing at it.
  fn delete_ksb(&mut self, id: KsbId) -> Result<(), Self::Error>;

  // ── Duties ────────────────────────────────────────────────────────────

  fn duties(&self) -> Result<Vec<Duty>, Self::Error>;

  fn duty(&self, id: DutyId) -> Result<Option<Duty>, Self::Error>;

  fn duty_by(&self, field: UniqueField, value: &str) -> Result<Option<Duty>, Self::Error>;

  fn insert_duty(&mut self, duty: &Duty) -> Result<(), Self::Error>;

  fn update_duty(&mut self, duty: &Duty) -> Result<(), Self::Error>;

  /// Remove the row, its own KSB links and every `coin_duties` link pointing
  /// at it.
  fn delete_duty(&mut self, id: DutyId) -> Result<(), Self::Error>;

  /// KSBs linked to `duty`, in link order.
  fn duty_ksbs(&self, duty: DutyId) -> Result<Vec<Ksb>, Self::Error>;

  fn link_duty_ksb(&mut self, duty: DutyId, ksb: KsbId) -> Result<(), Self::Error>;

  fn clear_duty_ksbs(&mut self, duty: DutyId) -> Result<(), Self::Error>;

  // ── Coins ─────────────────────────────────────────────────────────────

  fn coins(&self) -> Result<Vec<Coin>, Self::Error>;

  fn coin(&self, id: CoinId) -> Result<Option<Coin>, Self::Error>;

  fn coin_by_name(&self, name: &str) -> Result<Option<Coin>, Self::Error>;

  fn insert_coin(&mut self, coin: &Coin) -> Result<(), Self::Error>;

  fn update_coin(&mut self, coin: &Coin) -> Result<(), Self::Error>;

  /// Remove the row and its duty links.
  fn delete_coin(&mut self, id: CoinId) -> Result<(), Self::Error>;

  /// Duties linked to `coin`, in link order.
  fn coin_duties(&self, coin: CoinId) -> Result<Vec<Duty>, Self::Error>;

  fn link_coin_duty(&mut self, coin: CoinId, duty: DutyId) -> Result<(), Self::Error>;

  fn clear_coin_duties(&mut self, coin: CoinId) -> Result<(), Self::Error>;
}
