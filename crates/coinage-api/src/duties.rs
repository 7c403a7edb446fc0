//! Handlers for duty endpoints.
//!
//! | Method   | Path         | Notes |
//! |----------|--------------|-------|
//! | `GET`    | `/duties`    | Every duty with its KSBs |
//! | `POST`   | `/duty`      | Body: [`NewDuty`]; 201, 400 on duplicate, 404 on unknown KSB |
//! | `GET`    | `/duty/{id}` | 404 if not found |
//! | `PUT`    | `/duty/{id}` | Body: [`DutyPatch`]; `ksb_names` replaces the set |
//! | `DELETE` | `/duty/{id}` | Plain-text confirmation; also unlinks the duty from coins |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use coinage_core::{
  id::DutyId,
  model::{DutyPatch, NewDuty},
  store::CatalogStore,
  view::DutyView,
};

use crate::{
  error::ApiError,
  extract::{Body, Path},
};

/// `GET /duties`
pub async fn list<S: CatalogStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<DutyView>>, ApiError> {
  let duties = store.list_duties().await.map_err(ApiError::from_store)?;
  Ok(Json(duties))
}

/// `POST /duty`
pub async fn create<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Body(body): Body<NewDuty>,
) -> Result<impl IntoResponse, ApiError> {
  let duty = store.create_duty(body).await.map_err(ApiError::from_store)?;
  tracing::debug!(id = %duty.id, "duty created");
  Ok((StatusCode::CREATED, Json(duty)))
}

/// `GET /duty/{id}`
pub async fn get_one<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<DutyId>,
) -> Result<Json<DutyView>, ApiError> {
  let duty = store.get_duty(id).await.map_err(ApiError::from_store)?;
  Ok(Json(duty))
}

/// `PUT /duty/{id}`
pub async fn update<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<DutyId>,
  Body(body): Body<DutyPatch>,
) -> Result<Json<DutyView>, ApiError> {
  let duty = store.update_duty(id, body).await.map_err(ApiError::from_store)?;
  Ok(Json(duty))
}

/// `DELETE /duty/{id}`
pub async fn delete<S: CatalogStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<DutyId>,
) -> Result<&'static str, ApiError> {
  store.delete_duty(id).await.map_err(ApiError::from_store)?;
  tracing::debug!(%id, "duty deleted");
  Ok("Duty successfully deleted")
}
