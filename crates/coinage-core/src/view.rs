//! Serialised representations returned to clients.
//!
//! Nesting is exactly one level deep: a [`CoinView`] lists its duties as
//! [`DutySummary`] values (scalars only), while a [`DutyView`] served on its
//! own expands its KSBs.

use serde::{Deserialize, Serialize};

use crate::{
  id::{CoinId, DutyId, KsbId},
  model::{Coin, Duty, Ksb},
  tables::Tables,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KsbView {
  pub id:          KsbId,
  pub ksb_name:    String,
  pub description: String,
}

/// A duty without its KSBs, as nested inside a [`CoinView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutySummary {
  pub id:          DutyId,
  pub duty_name:   String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyView {
  pub id:          DutyId,
  pub duty_name:   String,
  pub description: String,
  pub ksbs:        Vec<KsbView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinView {
  pub id:        CoinId,
  pub coin_name: String,
  pub duties:    Vec<DutySummary>,
}

impl From<Ksb> for KsbView {
  fn from(k: Ksb) -> Self {
    Self { id: k.id, ksb_name: k.ksb_name, description: k.description }
  }
}

impl From<Duty> for DutySummary {
  fn from(d: Duty) -> Self {
    Self { id: d.id, duty_name: d.duty_name, description: d.description }
  }
}

/// Expand a duty with its linked KSBs.
pub fn duty_view<T: Tables>(tables: &T, duty: Duty) -> Result<DutyView, T::Error> {
  let ksbs = tables.duty_ksbs(duty.id)?;
  Ok(DutyView {
    id:          duty.id,
    duty_name:   duty.duty_name,
    description: duty.description,
    ksbs:        ksbs.into_iter().map(KsbView::from).collect(),
  })
}

/// Expand a coin with its linked duties (one level only).
pub fn coin_view<T: Tables>(tables: &T, coin: Coin) -> Result<CoinView, T::Error> {
  let duties = tables.coin_duties(coin.id)?;
  Ok(CoinView {
    id:        coin.id,
    coin_name: coin.coin_name,
    duties:    duties.into_iter().map(DutySummary::from).collect(),
  })
}
