//! Request extractors whose rejections render as [`ApiError`].
//!
//! axum's own `Json` and `Path` answer malformed input with plain-text 400s
//! and 422s. These wrappers run the same extraction and turn any rejection
//! into a `{"error": ...}` body with status 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// A JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Body<T>(pub T);

/// A deserialized path segment, e.g. a resource id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);
