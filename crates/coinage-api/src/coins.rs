//! Handlers for coin endpoints.
//!
//! | Method   | Path         | Notes |
//! |----------|--------------|-------|
//! | `GET`    | `/coins`     | Every coin with its duties (no KSBs) |
//! | `POST`   | `/coin`      | Body: [`NewCoin`]; 201, 400 on duplicate, 404 on unknown duty |
//! | `GET`    | `/coin/{id}` | 404 if not found |
//! | `PUT`    | `/coin/{id}` | Body: [`CoinPatch`]; `duty_names` replaces the set |
//! | `DELETE` | `/coin/{id}` | Plain-text confirmation |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use coinage_core::{
  id::CoinId,
  model::{CoinPatch, NewCoin},
  store::CatalogStore,
  view::CoinView,
};

use crate::{
  error::ApiError,
  extract::{Body, Path},
};

/// `GET /coins`
pub async fn list<S: CatalogStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<CoinView>>, ApiError> {
  let coins = store.list_coins().await.map_err(ApiError::from_store)?;
  Ok(Json(coins))
}

/// `POST /coin`
pub async fn create<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Body(body): Body<NewCoin>,
) -> Result<impl IntoResponse, ApiError> {
  let coin = store.create_coin(body).await.map_err(ApiError::from_store)?;
  tracing::debug!(id = %coin.id, "coin created");
  Ok((StatusCode::CREATED, Json(coin)))
}

/// `GET /coin/{id}`
pub async fn get_one<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<CoinId>,
) -> Result<Json<CoinView>, ApiError> {
  let coin = store.get_coin(id).await.map_err(ApiError::from_store)?;
  Ok(Json(coin))
}

/// `PUT /coin/{id}`
pub async fn update<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<CoinId>,
  Body(body): Body<CoinPatch>,
) -> Result<Json<CoinView>, ApiError> {
  let coin = store.update_coin(id, body).await.map_err(ApiError::from_store)?;
  Ok(Json(coin))
}

/// `DELETE /coin/{id}`
pub async fn delete<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<CoinId>,
) -> Result<&'static str, ApiError> {
  store.delete_coin(id).await.map_err(ApiError::from_store)?;
  tracing::debug!(%id, "coin deleted");
  Ok("Coin successfully deleted")
}
