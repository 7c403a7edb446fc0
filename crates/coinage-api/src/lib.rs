//! JSON REST API for Coinage.
//!
//! Exposes an axum [`Router`] backed by any [`coinage_core::store::CatalogStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = coinage_api::api_router(Arc::new(store));
//! ```

pub mod coins;
pub mod duties;
pub mod error;
pub mod extract;
pub mod ksbs;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use coinage_core::store::CatalogStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CatalogStore + 'static,
{
  Router::new()
    // Coins
    .route("/coins", get(coins::list::<S>))
    .route("/coin", post(coins::create::<S>))
    .route(
      "/coin/{id}",
      get(coins::get_one::<S>)
        .put(coins::update::<S>)
        .delete(coins::delete::<S>),
    )
    // Duties
    .route("/duties", get(duties::list::<S>))
    .route("/duty", post(duties::create::<S>))
    .route(
      "/duty/{id}",
      get(duties::get_one::<S>)
        .put(duties::update::<S>)
        .delete(duties::delete::<S>),
    )
    // KSBs
    .route("/ksbs", get(ksbs::list::<S>))
    .route("/ksb", post(ksbs::create::<S>))
    .route(
      "/ksb/{id}",
      get(ksbs::get_one::<S>)
        .put(ksbs::update::<S>)
        .delete(ksbs::delete::<S>),
    )
    .with_state(store)
}
