//! Server wiring for Coinage: configuration, store selection and the
//! top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::{Context as _, bail};
use axum::Router;
use coinage_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file,
/// `COINAGE_*` environment variables, then the bare `DB_URL` variable.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub database_url: String,
}

impl ServerConfig {
  pub fn load(path: &Path, db_url: Option<String>) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 5000_i64)?
      .set_default("database_url", "sqlite://coinage.db")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("COINAGE"))
      .set_override_option("database_url", db_url)?
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Database location ────────────────────────────────────────────────────────

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Database {
  Memory,
  File(PathBuf),
}

impl Database {
  /// Parse `sqlite://<path>`, `sqlite:///:memory:`, `:memory:` or a bare path.
  pub fn from_url(url: &str) -> anyhow::Result<Self> {
    let rest = match url.split_once("://") {
      Some(("sqlite", rest)) => rest,
      Some((scheme, _)) => bail!("unsupported database scheme {scheme:?}"),
      None => url,
    };

    if rest.is_empty() {
      bail!("database url {url:?} has no path");
    }
    if rest == ":memory:" || rest == "/:memory:" {
      return Ok(Database::Memory);
    }
    Ok(Database::File(expand_tilde(Path::new(rest))))
  }

  /// Open the store, creating a file database's parent directories first.
  pub async fn open(&self) -> anyhow::Result<SqliteStore> {
    match self {
      Database::Memory => SqliteStore::open_in_memory()
        .await
        .context("failed to open in-memory store"),
      Database::File(path) => {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
          std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create database directory {parent:?}"))?;
        }
        SqliteStore::open(path)
          .await
          .with_context(|| format!("failed to open store at {path:?}"))
      }
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the REST API plus request tracing.
pub fn app(store: SqliteStore) -> Router {
  coinage_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sqlite_urls() {
    assert_eq!(Database::from_url("sqlite:///:memory:").unwrap(), Database::Memory);
    assert_eq!(Database::from_url(":memory:").unwrap(), Database::Memory);
    assert_eq!(
      Database::from_url("sqlite://data/coinage.db").unwrap(),
      Database::File(PathBuf::from("data/coinage.db"))
    );
    assert_eq!(
      Database::from_url("sqlite:///var/lib/coinage.db").unwrap(),
      Database::File(PathBuf::from("/var/lib/coinage.db"))
    );
    assert_eq!(
      Database::from_url("coinage.db").unwrap(),
      Database::File(PathBuf::from("coinage.db"))
    );
  }

  #[test]
  fn foreign_schemes_are_rejected() {
    assert!(Database::from_url("postgres://localhost/coins").is_err());
    assert!(Database::from_url("sqlite://").is_err());
  }

  #[test]
  fn defaults_apply_without_a_file() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml"), None).unwrap();
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.address(), format!("{}:5000", cfg.host));
  }

  #[test]
  fn db_url_overrides_file() {
    let dir = std::env::temp_dir().join(format!("coinage-cfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "port = 8081\ndatabase_url = \"sqlite://from-file.db\"\n").unwrap();

    let from_file = ServerConfig::load(&path, None).unwrap();
    assert_eq!(from_file.port, 8081);
    assert_eq!(from_file.database_url, "sqlite://from-file.db");

    let overridden =
      ServerConfig::load(&path, Some("sqlite:///:memory:".into())).unwrap();
    assert_eq!(overridden.database_url, "sqlite:///:memory:");

    std::fs::remove_dir_all(&dir).ok();
  }

  #[tokio::test]
  async fn file_database_creates_missing_directories() {
    let root = std::env::temp_dir().join(format!("coinage-dirs-{}", std::process::id()));
    let path = root.join("share").join("coinage").join("coinage.db");
    std::fs::remove_dir_all(&root).ok();

    let url = format!("sqlite://{}", path.display());
    let store = Database::from_url(&url).unwrap().open().await.unwrap();
    drop(store);
    assert!(path.is_file());

    std::fs::remove_dir_all(&root).ok();
  }

  #[tokio::test]
  async fn app_serves_the_api() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt as _;

    let store = Database::Memory.open().await.unwrap();
    let resp = app(store)
      .oneshot(Request::builder().uri("/coins").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(resp.status(), axum::http::StatusCode::OK);
  }
}
