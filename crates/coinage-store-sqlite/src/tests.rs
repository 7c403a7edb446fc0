//! Integration tests for `SqliteStore` against an in-memory database.

use coinage_core::{
  id::{CoinId, DutyId, EntityKind, KsbId},
  model::{CoinPatch, Duty, DutyPatch, Ksb, KsbPatch, NewCoin, NewDuty, NewKsb},
  store::{CatalogStore, StoreError as _},
  tables::Tables as _,
};

use crate::{Error, SqliteStore, schema::SCHEMA, tables::SqlTables};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn names(list: &[&str]) -> Option<Vec<String>> {
  Some(list.iter().map(|s| s.to_string()).collect())
}

async fn seed_ksb(s: &SqliteStore, name: &str) {
  s.create_ksb(NewKsb { ksb_name: name.into(), description: format!("{name} text") })
    .await
    .unwrap();
}

async fn seed_duty(s: &SqliteStore, name: &str, ksbs: &[&str]) {
  s.create_duty(NewDuty {
    duty_name:   name.into(),
    description: format!("{name} text"),
    ksb_names:   names(ksbs),
  })
  .await
  .unwrap();
}

fn domain(err: &Error) -> &coinage_core::Error {
  err.domain().expect("domain error")
}

// ─── KSBs ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_ksb() {
  let s = store().await;

  let created = s
    .create_ksb(NewKsb { ksb_name: "K1".into(), description: "d".into() })
    .await
    .unwrap();
  let fetched = s.get_ksb(created.id).await.unwrap();
  assert_eq!(fetched, created);

  let all = s.list_ksbs().await.unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn duplicate_ksb_is_rejected() {
  let s = store().await;
  seed_ksb(&s, "K1").await;

  let err = s
    .create_ksb(NewKsb { ksb_name: "K1".into(), description: "other".into() })
    .await
    .unwrap_err();
  assert!(matches!(domain(&err), coinage_core::Error::AlreadyExists { kind: EntityKind::Ksb, .. }));
}

#[tokio::test]
async fn ksb_update_changes_scalars() {
  let s = store().await;
  seed_ksb(&s, "K1").await;
  let id = s.list_ksbs().await.unwrap()[0].id;

  let updated = s
    .update_ksb(id, KsbPatch { ksb_name: Some("K1b".into()), description: None })
    .await
    .unwrap();
  assert_eq!(updated.ksb_name, "K1b");
  assert_eq!(updated.description, "K1 text");
  assert_eq!(s.get_ksb(id).await.unwrap().ksb_name, "K1b");
}

// ─── Constraint backstop ─────────────────────────────────────────────────────

/// Writes that skip the service-level checks still surface UNIQUE violations
/// as `AlreadyExists`, naming the value that actually collided.
#[test]
fn unique_violation_reports_the_colliding_value() {
  let mut conn = rusqlite::Connection::open_in_memory().unwrap();
  conn.execute_batch(SCHEMA).unwrap();
  let tx = conn.transaction().unwrap();
  let mut t = SqlTables::new(&tx);

  let ksb = |name: &str, description: &str| Ksb {
    id:          KsbId::new(),
    ksb_name:    name.into(),
    description: description.into(),
  };
  t.insert_ksb(&ksb("K1", "d")).unwrap();

  let err = t.insert_ksb(&ksb("K2", "d")).unwrap_err();
  assert!(matches!(
    domain(&err),
    coinage_core::Error::AlreadyExists { kind: EntityKind::Ksb, value } if value == "d"
  ));

  let err = t.insert_ksb(&ksb("K1", "other")).unwrap_err();
  assert!(matches!(
    domain(&err),
    coinage_core::Error::AlreadyExists { kind: EntityKind::Ksb, value } if value == "K1"
  ));

  let d1 = Duty { id: DutyId::new(), duty_name: "D1".into(), description: "dd".into() };
  let mut d2 = Duty { id: DutyId::new(), duty_name: "D2".into(), description: "other".into() };
  t.insert_duty(&d1).unwrap();
  t.insert_duty(&d2).unwrap();

  d2.description = "dd".into();
  let err = t.update_duty(&d2).unwrap_err();
  assert!(matches!(
    domain(&err),
    coinage_core::Error::AlreadyExists { kind: EntityKind::Duty, value } if value == "dd"
  ));
}

// ─── Duties ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn duty_expands_its_ksbs_in_link_order() {
  let s = store().await;
  seed_ksb(&s, "K1").await;
  seed_ksb(&s, "K2").await;

  let duty = s
    .create_duty(NewDuty {
      duty_name:   "D1".into(),
      description: "dd".into(),
      ksb_names:   names(&["K2", "K1"]),
    })
    .await
    .unwrap();

  let ksbs: Vec<_> = duty.ksbs.iter().map(|k| k.ksb_name.as_str()).collect();
  assert_eq!(ksbs, ["K2", "K1"]);
  assert_eq!(s.get_duty(duty.id).await.unwrap(), duty);
}

#[tokio::test]
async fn deleting_a_ksb_unlinks_it_from_duties() {
  let s = store().await;
  seed_ksb(&s, "K1").await;
  seed_ksb(&s, "K2").await;
  seed_duty(&s, "D1", &["K1", "K2"]).await;

  let k1 = s.list_ksbs().await.unwrap()[0].id;
  s.delete_ksb(k1).await.unwrap();

  let duty = &s.list_duties().await.unwrap()[0];
  assert_eq!(duty.ksbs.len(), 1);
  assert_eq!(duty.ksbs[0].ksb_name, "K2");
}

#[tokio::test]
async fn failed_duty_update_rolls_back_rename() {
  let s = store().await;
  seed_ksb(&s, "K1").await;
  seed_duty(&s, "D1", &["K1"]).await;
  let id = s.list_duties().await.unwrap()[0].id;

  let err = s
    .update_duty(id, DutyPatch {
      duty_name: Some("renamed".into()),
      ksb_names: names(&["ghost"]),
      ..Default::default()
    })
    .await
    .unwrap_err();
  assert!(matches!(domain(&err), coinage_core::Error::MissingReference { .. }));

  let duty = s.get_duty(id).await.unwrap();
  assert_eq!(duty.duty_name, "D1");
  assert_eq!(duty.ksbs.len(), 1);
}

// ─── Coins ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn coin_with_missing_duty_is_not_persisted() {
  let s = store().await;

  let err = s
    .create_coin(NewCoin { coin_name: "C1".into(), duty_names: names(&["X"]) })
    .await
    .unwrap_err();
  assert!(matches!(
    domain(&err),
    coinage_core::Error::MissingReference { kind: EntityKind::Duty, name } if name == "X"
  ));
  assert!(s.list_coins().await.unwrap().is_empty());

  // The name is still free.
  s.create_coin(NewCoin { coin_name: "C1".into(), duty_names: None })
    .await
    .unwrap();
}

#[tokio::test]
async fn coin_update_replaces_duty_set() {
  let s = store().await;
  for name in ["A", "B", "C"] {
    seed_duty(&s, name, &[]).await;
  }
  let coin = s
    .create_coin(NewCoin { coin_name: "C1".into(), duty_names: names(&["A", "B"]) })
    .await
    .unwrap();

  s.update_coin(coin.id, CoinPatch { coin_name: None, duty_names: names(&["B", "C"]) })
    .await
    .unwrap();

  let stored = s.get_coin(coin.id).await.unwrap();
  let duties: Vec<_> = stored.duties.iter().map(|d| d.duty_name.as_str()).collect();
  assert_eq!(duties, ["B", "C"]);
}

#[tokio::test]
async fn coin_rename_to_taken_name_is_rejected() {
  let s = store().await;
  let c1 = s
    .create_coin(NewCoin { coin_name: "C1".into(), duty_names: None })
    .await
    .unwrap();
  s.create_coin(NewCoin { coin_name: "C2".into(), duty_names: None })
    .await
    .unwrap();

  let err = s
    .update_coin(c1.id, CoinPatch { coin_name: Some("C2".into()), duty_names: None })
    .await
    .unwrap_err();
  assert!(matches!(domain(&err), coinage_core::Error::AlreadyExists { .. }));
}

#[tokio::test]
async fn delete_coin_twice_is_not_found() {
  let s = store().await;
  seed_duty(&s, "D1", &[]).await;
  let coin = s
    .create_coin(NewCoin { coin_name: "C1".into(), duty_names: names(&["D1"]) })
    .await
    .unwrap();

  s.delete_coin(coin.id).await.unwrap();
  let err = s.get_coin(coin.id).await.unwrap_err();
  assert!(matches!(domain(&err), coinage_core::Error::NotFound { .. }));
  let err = s.delete_coin(coin.id).await.unwrap_err();
  assert!(matches!(domain(&err), coinage_core::Error::NotFound { .. }));

  // The duty itself survives.
  assert_eq!(s.list_duties().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_coin_is_not_found() {
  let s = store().await;
  let err = s.get_coin(CoinId::new()).await.unwrap_err();
  assert!(matches!(
    domain(&err),
    coinage_core::Error::NotFound { kind: EntityKind::Coin, .. }
  ));
}

#[tokio::test]
async fn data_survives_reopen() {
  let dir = std::env::temp_dir().join(format!("coinage-{}", CoinId::new()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("catalogue.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    seed_ksb(&s, "K1").await;
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let all = s.list_ksbs().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].ksb_name, "K1");

  std::fs::remove_dir_all(&dir).ok();
}
