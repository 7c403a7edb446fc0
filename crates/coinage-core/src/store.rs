//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `coinage-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.
//! Each method is one service call from [`crate::service`] run inside one
//! store transaction.

use std::future::Future;

use crate::{
  Error,
  id::{CoinId, DutyId, KsbId},
  model::{CoinPatch, DutyPatch, KsbPatch, NewCoin, NewDuty, NewKsb},
  view::{CoinView, DutyView, KsbView},
};

/// A backend error that may wrap a domain [`Error`].
///
/// Lets callers tell "that coin does not exist" apart from "the disk is on
/// fire" without knowing the backend's error type.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn domain(&self) -> Option<&Error>;
}

/// Abstraction over a Coinage catalogue backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: StoreError;

  // ── KSBs ──────────────────────────────────────────────────────────────

  fn list_ksbs(&self) -> impl Future<Output = Result<Vec<KsbView>, Self::Error>> + Send + '_;

  fn create_ksb(
    &self,
    input: NewKsb,
  ) -> impl Future<Output = Result<KsbView, Self::Error>> + Send + '_;

  fn get_ksb(&self, id: KsbId) -> impl Future<Output = Result<KsbView, Self::Error>> + Send + '_;

  fn update_ksb(
    &self,
    id: KsbId,
    patch: KsbPatch,
  ) -> impl Future<Output = Result<KsbView, Self::Error>> + Send + '_;

  fn delete_ksb(&self, id: KsbId) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Duties ────────────────────────────────────────────────────────────

  fn list_duties(&self)
  -> impl Future<Output = Result<Vec<DutyView>, Self::Error>> + Send + '_;

  /// Fails with a missing reference if any of `input.ksb_names` is unknown;
  /// nothing is persisted in that case.
  fn create_duty(
    &self,
    input: NewDuty,
  ) -> impl Future<Output = Result<DutyView, Self::Error>> + Send + '_;

  fn get_duty(&self, id: DutyId)
  -> impl Future<Output = Result<DutyView, Self::Error>> + Send + '_;

  /// A present `patch.ksb_names` replaces the duty's KSB set wholesale.
  fn update_duty(
    &self,
    id: DutyId,
    patch: DutyPatch,
  ) -> impl Future<Output = Result<DutyView, Self::Error>> + Send + '_;

  fn delete_duty(&self, id: DutyId) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Coins ─────────────────────────────────────────────────────────────

  fn list_coins(&self) -> impl Future<Output = Result<Vec<CoinView>, Self::Error>> + Send + '_;

  /// Fails with a missing reference if any of `input.duty_names` is unknown;
  /// nothing is persisted in that case.
  fn create_coin(
    &self,
    input: NewCoin,
  ) -> impl Future<Output = Result<CoinView, Self::Error>> + Send + '_;

  fn get_coin(&self, id: CoinId)
  -> impl Future<Output = Result<CoinView, Self::Error>> + Send + '_;

  /// A present `patch.duty_names` replaces the coin's duty set wholesale.
  fn update_coin(
    &self,
    id: CoinId,
    patch: CoinPatch,
  ) -> impl Future<Output = Result<CoinView, Self::Error>> + Send + '_;

  fn delete_coin(&self, id: CoinId) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
