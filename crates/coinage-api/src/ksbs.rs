//! Handlers for KSB endpoints. KSBs carry no associations.
//!
//! | Method   | Path        | Notes |
//! |----------|-------------|-------|
//! | `GET`    | `/ksbs`     | Every KSB |
//! | `POST`   | `/ksb`      | Body: [`NewKsb`]; 201, 400 on duplicate |
//! | `GET`    | `/ksb/{id}` | 404 if not found |
//! | `PUT`    | `/ksb/{id}` | Body: [`KsbPatch`] |
//! | `DELETE` | `/ksb/{id}` | Plain-text confirmation; also unlinks the KSB from duties |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use coinage_core::{
  id::KsbId,
  model::{KsbPatch, NewKsb},
  store::CatalogStore,
  view::KsbView,
};

use crate::{
  error::ApiError,
  extract::{Body, Path},
};

/// `GET /ksbs`
pub async fn list<S: CatalogStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<KsbView>>, ApiError> {
  let ksbs = store.list_ksbs().await.map_err(ApiError::from_store)?;
  Ok(Json(ksbs))
}

/// `POST /ksb`
pub async fn create<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Body(body): Body<NewKsb>,
) -> Result<impl IntoResponse, ApiError> {
  let ksb = store.create_ksb(body).await.map_err(ApiError::from_store)?;
  tracing::debug!(id = %ksb.id, "ksb created");
  Ok((StatusCode::CREATED, Json(ksb)))
}

/// `GET /ksb/{id}`
pub async fn get_one<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<KsbId>,
) -> Result<Json<KsbView>, ApiError> {
  let ksb = store.get_ksb(id).await.map_err(ApiError::from_store)?;
  Ok(Json(ksb))
}

/// `PUT /ksb/{id}`
pub async fn update<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<KsbId>,
  Body(body): Body<KsbPatch>,
) -> Result<Json<KsbView>, ApiError> {
  let ksb = store.update_ksb(id, body).await.map_err(ApiError::from_store)?;
  Ok(Json(ksb))
}

/// `DELETE /ksb/{id}`
pub async fn delete<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<KsbId>,
) -> Result<&'static str, ApiError> {
  store.delete_ksb(id).await.map_err(ApiError::from_store)?;
  tracing::debug!(%id, "ksb deleted");
  Ok("KSB successfully deleted")
}
