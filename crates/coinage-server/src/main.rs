//! coinage server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite catalogue named by `database_url`, and serves the REST API over
//! HTTP.
//!
//! The connection string can also be supplied through `DB_URL`, which wins
//! over every other source:
//!
//! ```text
//! DB_URL=sqlite:///:memory: cargo run -p coinage-server
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use coinage_server::{Database, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Coinage catalogue server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the configured bind host.
  #[arg(long)]
  host: Option<String>,

  /// Override the configured port.
  #[arg(short, long)]
  port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let mut server_cfg = ServerConfig::load(&cli.config, std::env::var("DB_URL").ok())
    .context("failed to load configuration")?;
  if let Some(host) = cli.host {
    server_cfg.host = host;
  }
  if let Some(port) = cli.port {
    server_cfg.port = port;
  }

  let database = Database::from_url(&server_cfg.database_url)?;
  tracing::info!(?database, "opening store");
  let store = database.open().await?;

  let app = coinage_server::app(store);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
