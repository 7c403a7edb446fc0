//! Encoding and decoding helpers between domain records and SQLite rows.
//!
//! Identifiers are stored as hyphenated lowercase UUID strings. Rows are first
//! read into `Raw*` structs of plain strings and decoded afterwards, so a
//! malformed id surfaces as [`Error::Uuid`](crate::Error::Uuid) rather than a
//! rusqlite conversion error.

use coinage_core::{
  id::{CoinId, DutyId, KsbId},
  model::{Coin, Duty, Ksb},
};
use rusqlite::Row;
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Raw rows ─────────────────────────────────────────────────────────────────

pub struct RawKsb {
  pub ksb_id:      String,
  pub ksb_name:    String,
  pub description: String,
}

impl RawKsb {
  /// Column order: `ksb_id, ksb_name, description`.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { ksb_id: row.get(0)?, ksb_name: row.get(1)?, description: row.get(2)? })
  }

  pub fn into_ksb(self) -> Result<Ksb> {
    Ok(Ksb {
      id:          KsbId::from_uuid(decode_uuid(&self.ksb_id)?),
      ksb_name:    self.ksb_name,
      description: self.description,
    })
  }
}

pub struct RawDuty {
  pub duty_id:     String,
  pub duty_name:   String,
  pub description: String,
}

impl RawDuty {
  /// Column order: `duty_id, duty_name, description`.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { duty_id: row.get(0)?, duty_name: row.get(1)?, description: row.get(2)? })
  }

  pub fn into_duty(self) -> Result<Duty> {
    Ok(Duty {
      id:          DutyId::from_uuid(decode_uuid(&self.duty_id)?),
      duty_name:   self.duty_name,
      description: self.description,
    })
  }
}

pub struct RawCoin {
  pub coin_id:   String,
  pub coin_name: String,
}

impl RawCoin {
  /// Column order: `coin_id, coin_name`.
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { coin_id: row.get(0)?, coin_name: row.get(1)? })
  }

  pub fn into_coin(self) -> Result<Coin> {
    Ok(Coin {
      id:        CoinId::from_uuid(decode_uuid(&self.coin_id)?),
      coin_name: self.coin_name,
    })
  }
}
