//! [`SqlTables`] — row-level access over one open SQLite transaction.

use coinage_core::{
  id::{CoinId, DutyId, EntityKind, KsbId},
  model::{Coin, Duty, Ksb, UniqueField},
  tables::Tables,
};
use rusqlite::{Connection, OptionalExtension as _, Params};

use crate::{
  Error, Result,
  encode::{RawCoin, RawDuty, RawKsb, encode_uuid},
};

const KSB_COLUMNS: &str = "SELECT ksb_id, ksb_name, description FROM ksbs";
const DUTY_COLUMNS: &str = "SELECT duty_id, duty_name, description FROM duties";
const COIN_COLUMNS: &str = "SELECT coin_id, coin_name FROM coins";

/// Borrowed view of a connection that is inside a transaction.
pub struct SqlTables<'a> {
  conn: &'a Connection,
}

impl<'a> SqlTables<'a> {
  pub fn new(conn: &'a Connection) -> Self { Self { conn } }

  fn ksb_rows(&self, sql: &str, params: impl Params) -> Result<Vec<Ksb>> {
    let mut stmt = self.conn.prepare_cached(sql)?;
    let raws = stmt
      .query_map(params, RawKsb::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    raws.into_iter().map(RawKsb::into_ksb).collect()
  }

  fn ksb_row(&self, sql: &str, params: impl Params) -> Result<Option<Ksb>> {
    let raw = self
      .conn
      .prepare_cached(sql)?
      .query_row(params, RawKsb::from_row)
      .optional()?;
    raw.map(RawKsb::into_ksb).transpose()
  }

  fn duty_rows(&self, sql: &str, params: impl Params) -> Result<Vec<Duty>> {
    let mut stmt = self.conn.prepare_cached(sql)?;
    let raws = stmt
      .query_map(params, RawDuty::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    raws.into_iter().map(RawDuty::into_duty).collect()
  }

  fn duty_row(&self, sql: &str, params: impl Params) -> Result<Option<Duty>> {
    let raw = self
      .conn
      .prepare_cached(sql)?
      .query_row(params, RawDuty::from_row)
      .optional()?;
    raw.map(RawDuty::into_duty).transpose()
  }

  fn coin_rows(&self, sql: &str, params: impl Params) -> Result<Vec<Coin>> {
    let mut stmt = self.conn.prepare_cached(sql)?;
    let raws = stmt
      .query_map(params, RawCoin::from_row)?
      .collect::<rusqlite::Result<Vec<_>>>()?;
    raws.into_iter().map(RawCoin::into_coin).collect()
  }

  fn coin_row(&self, sql: &str, params: impl Params) -> Result<Option<Coin>> {
    let raw = self
      .conn
      .prepare_cached(sql)?
      .query_row(params, RawCoin::from_row)
      .optional()?;
    raw.map(RawCoin::into_coin).transpose()
  }

  /// Run a write, turning a UNIQUE violation into `AlreadyExists`.
  ///
  /// `unique` pairs each UNIQUE column with the value being written to it.
  /// SQLite names the offending `table.column` in the constraint message,
  /// which picks the value reported back.
  fn write(
    &self,
    sql: &str,
    params: impl Params,
    kind: EntityKind,
    unique: &[(&str, &str)],
  ) -> Result<()> {
    match self.conn.execute(sql, params) {
      Ok(_) => Ok(()),
      Err(rusqlite::Error::SqliteFailure(e, message))
        if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
      {
        let message = message.unwrap_or_default();
        let value = unique
          .iter()
          .find(|(column, _)| message.ends_with(&format!(".{column}")))
          .or(unique.first())
          .map(|(_, value)| value.to_string())
          .unwrap_or_default();
        Err(coinage_core::Error::AlreadyExists { kind, value }.into())
      }
      Err(e) => Err(e.into()),
    }
  }

  fn exec(&self, sql: &str, params: impl Params) -> Result<()> {
    self.conn.execute(sql, params)?;
    Ok(())
  }
}

impl Tables for SqlTables<'_> {
  type Error = Error;

  // ── KSBs ──────────────────────────────────────────────────────────────────

  fn ksbs(&self) -> Result<Vec<Ksb>> {
    self.ksb_rows(&format!("{KSB_COLUMNS} ORDER BY rowid"), [])
  }

  fn ksb(&self, id: KsbId) -> Result<Option<Ksb>> {
    self.ksb_row(
      &format!("{KSB_COLUMNS} WHERE ksb_id = ?1"),
      [encode_uuid(id.as_uuid())],
    )
  }

  fn ksb_by(&self, field: UniqueField, value: &str) -> Result<Option<Ksb>> {
    let column = match field {
      UniqueField::Name => "ksb_name",
      UniqueField::Description => "description",
    };
    self.ksb_row(&format!("{KSB_COLUMNS} WHERE {column} = ?1"), [value])
  }

  fn insert_ksb(&mut self, ksb: &Ksb) -> Result<()> {
    self.write(
      "INSERT INTO ksbs (ksb_id, ksb_name, description) VALUES (?1, ?2, ?3)",
      rusqlite::params![encode_uuid(ksb.id.as_uuid()), ksb.ksb_name, ksb.description],
      EntityKind::Ksb,
      &[("ksb_name", ksb.ksb_name.as_str()), ("description", ksb.description.as_str())],
    )
  }

  fn update_ksb(&mut self, ksb: &Ksb) -> Result<()> {
    self.write(
      "UPDATE ksbs SET ksb_name = ?2, description = ?3 WHERE ksb_id = ?1",
      rusqlite::params![encode_uuid(ksb.id.as_uuid()), ksb.ksb_name, ksb.description],
      EntityKind::Ksb,
      &[("ksb_name", ksb.ksb_name.as_str()), ("description", ksb.description.as_str())],
    )
  }

  fn delete_ksb(&mut self, id: KsbId) -> Result<()> {
    self.exec("DELETE FROM ksbs WHERE ksb_id = ?1", [encode_uuid(id.as_uuid())])
  }

  // ── Duties ────────────────────────────────────────────────────────────────

  fn duties(&self) -> Result<Vec<Duty>> {
    self.duty_rows(&format!("{DUTY_COLUMNS} ORDER BY rowid"), [])
  }

  fn duty(&self, id: DutyId) -> Result<Option<Duty>> {
    self.duty_row(
      &format!("{DUTY_COLUMNS} WHERE duty_id = ?1"),
      [encode_uuid(id.as_uuid())],
    )
  }

  fn duty_by(&self, field: UniqueField, value: &str) -> Result<Option<Duty>> {
    let column = match field {
      UniqueField::Name => "duty_name",
      UniqueField::Description => "description",
    };
    self.duty_row(&format!("{DUTY_COLUMNS} WHERE {column} = ?1"), [value])
  }

  fn insert_duty(&mut self, duty: &Duty) -> Result<()> {
    self.write(
      "INSERT INTO duties (duty_id, duty_name, description) VALUES (?1, ?2, ?3)",
      rusqlite::params![encode_uuid(duty.id.as_uuid()), duty.duty_name, duty.description],
      EntityKind::Duty,
      &[("duty_name", duty.duty_name.as_str()), ("description", duty.description.as_str())],
    )
  }

  fn update_duty(&mut self, duty: &Duty) -> Result<()> {
    self.write(
      "UPDATE duties SET duty_name = ?2, description = ?3 WHERE duty_id = ?1",
      rusqlite::params![encode_uuid(duty.id.as_uuid()), duty.duty_name, duty.description],
      EntityKind::Duty,
      &[("duty_name", duty.duty_name.as_str()), ("description", duty.description.as_str())],
    )
  }

  fn delete_duty(&mut self, id: DutyId) -> Result<()> {
    self.exec("DELETE FROM duties WHERE duty_id = ?1", [encode_uuid(id.as_uuid())])
  }

  fn duty_ksbs(&self, duty: DutyId) -> Result<Vec<Ksb>> {
    self.ksb_rows(
      "SELECT k.ksb_id, k.ksb_name, k.description
       FROM duty_ksb l
       JOIN ksbs k ON k.ksb_id = l.ksb_id
       WHERE l.duty_id = ?1
       ORDER BY l.rowid",
      [encode_uuid(duty.as_uuid())],
    )
  }

  fn link_duty_ksb(&mut self, duty: DutyId, ksb: KsbId) -> Result<()> {
    self.exec(
      "INSERT OR IGNORE INTO duty_ksb (duty_id, ksb_id) VALUES (?1, ?2)",
      [encode_uuid(duty.as_uuid()), encode_uuid(ksb.as_uuid())],
    )
  }

  fn clear_duty_ksbs(&mut self, duty: DutyId) -> Result<()> {
    self.exec("DELETE FROM duty_ksb WHERE duty_id = ?1", [encode_uuid(duty.as_uuid())])
  }

  // ── Coins ─────────────────────────────────────────────────────────────────

  fn coins(&self) -> Result<Vec<Coin>> {
    self.coin_rows(&format!("{COIN_COLUMNS} ORDER BY rowid"), [])
  }

  fn coin(&self, id: CoinId) -> Result<Option<Coin>> {
    self.coin_row(
      &format!("{COIN_COLUMNS} WHERE coin_id = ?1"),
      [encode_uuid(id.as_uuid())],
    )
  }

  fn coin_by_name(&self, name: &str) -> Result<Option<Coin>> {
    self.coin_row(&format!("{COIN_COLUMNS} WHERE coin_name = ?1"), [name])
  }

  fn insert_coin(&mut self, coin: &Coin) -> Result<()> {
    self.write(
      "INSERT INTO coins (coin_id, coin_name) VALUES (?1, ?2)",
      rusqlite::params![encode_uuid(coin.id.as_uuid()), coin.coin_name],
      EntityKind::Coin,
      &[("coin_name", coin.coin_name.as_str())],
    )
  }

  fn update_coin(&mut self, coin: &Coin) -> Result<()> {
    self.write(
      "UPDATE coins SET coin_name = ?2 WHERE coin_id = ?1",
      rusqlite::params![encode_uuid(coin.id.as_uuid()), coin.coin_name],
      EntityKind::Coin,
      &[("coin_name", coin.coin_name.as_str())],
    )
  }

  fn delete_coin(&mut self, id: CoinId) -> Result<()> {
    self.exec("DELETE FROM coins WHERE coin_id = ?1", [encode_uuid(id.as_uuid())])
  }

  fn coin_duties(&self, coin: CoinId) -> Result<Vec<Duty>> {
    self.duty_rows(
      "SELECT d.duty_id, d.duty_name, d.description
       FROM coin_duties l
       JOIN duties d ON d.duty_id = l.duty_id
       WHERE l.coin_id = ?1
       ORDER BY l.rowid",
      [encode_uuid(coin.as_uuid())],
    )
  }

  fn link_coin_duty(&mut self, coin: CoinId, duty: DutyId) -> Result<()> {
    self.exec(
      "INSERT OR IGNORE INTO coin_duties (coin_id, duty_id) VALUES (?1, ?2)",
      [encode_uuid(coin.as_uuid()), encode_uuid(duty.as_uuid())],
    )
  }

  fn clear_coin_duties(&mut self, coin: CoinId) -> Result<()> {
    self.exec("DELETE FROM coin_duties WHERE coin_id = ?1", [encode_uuid(coin.as_uuid())])
  }
}
