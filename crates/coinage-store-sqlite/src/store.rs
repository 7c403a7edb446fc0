//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use coinage_core::{
  id::{CoinId, DutyId, KsbId},
  model::{CoinPatch, DutyPatch, KsbPatch, NewCoin, NewDuty, NewKsb},
  service::{coin, duty, ksb},
  store::CatalogStore,
  view::{CoinView, DutyView, KsbView},
};

use crate::{Result, schema::SCHEMA, tables::SqlTables};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Coinage catalogue backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All calls
/// are serialised onto the connection's worker thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("schema initialised");
    Ok(())
  }

  /// Run `op` inside one transaction, committing only if it succeeds.
  ///
  /// A dropped `rusqlite::Transaction` rolls back, so any error returned by
  /// `op` discards every write it made.
  async fn transact<R, F>(&self, op: F) -> Result<R>
  where
    F: FnOnce(&mut SqlTables<'_>) -> Result<R> + Send + 'static,
    R: Send + 'static,
  {
    let outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let outcome = op(&mut SqlTables::new(&tx));
        match outcome {
          Ok(_) => tx.commit()?,
          Err(ref e) => tracing::debug!("rolling back: {e}"),
        }
        Ok(outcome)
      })
      .await?;
    outcome
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── KSBs ──────────────────────────────────────────────────────────────────

  async fn list_ksbs(&self) -> Result<Vec<KsbView>> {
    self.transact(|t| ksb::list(&*t)).await
  }

  async fn create_ksb(&self, input: NewKsb) -> Result<KsbView> {
    self.transact(move |t| ksb::create(t, input)).await
  }

  async fn get_ksb(&self, id: KsbId) -> Result<KsbView> {
    self.transact(move |t| ksb::get(&*t, id)).await
  }

  async fn update_ksb(&self, id: KsbId, patch: KsbPatch) -> Result<KsbView> {
    self.transact(move |t| ksb::update(t, id, patch)).await
  }

  async fn delete_ksb(&self, id: KsbId) -> Result<()> {
    self.transact(move |t| ksb::delete(t, id)).await
  }

  // ── Duties ────────────────────────────────────────────────────────────────

  async fn list_duties(&self) -> Result<Vec<DutyView>> {
    self.transact(|t| duty::list(&*t)).await
  }

  async fn create_duty(&self, input: NewDuty) -> Result<DutyView> {
    self.transact(move |t| duty::create(t, input)).await
  }

  async fn get_duty(&self, id: DutyId) -> Result<DutyView> {
    self.transact(move |t| duty::get(&*t, id)).await
  }

  async fn update_duty(&self, id: DutyId, patch: DutyPatch) -> Result<DutyView> {
    self.transact(move |t| duty::update(t, id, patch)).await
  }

  async fn delete_duty(&self, id: DutyId) -> Result<()> {
    self.transact(move |t| duty::delete(t, id)).await
  }

  // ── Coins ─────────────────────────────────────────────────────────────────

  async fn list_coins(&self) -> Result<Vec<CoinView>> {
    self.transact(|t| coin::list(&*t)).await
  }

  async fn create_coin(&self, input: NewCoin) -> Result<CoinView> {
    self.transact(move |t| coin::create(t, input)).await
  }

  async fn get_coin(&self, id: CoinId) -> Result<CoinView> {
    self.transact(move |t| coin::get(&*t, id)).await
  }

  async fn update_coin(&self, id: CoinId, patch: CoinPatch) -> Result<CoinView> {
    self.transact(move |t| coin::update(t, id, patch)).await
  }

  async fn delete_coin(&self, id: CoinId) -> Result<()> {
    self.transact(move |t| coin::delete(t, id)).await
  }
}
