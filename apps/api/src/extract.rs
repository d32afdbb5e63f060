//! Request extractors that report rejections as `ApiError`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body extractor whose rejections map to 400 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections map to 400 responses.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor whose rejections map to 400 responses.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
