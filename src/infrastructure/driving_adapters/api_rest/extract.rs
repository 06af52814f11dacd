//! Request Extractors

use axum::extract::{FromRequest, FromRequestParts};

use crate::shared::errors::ApiError;

/// JSON body extractor whose decoding failures render as `400` API errors
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose decoding failures render as `400` API errors
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
