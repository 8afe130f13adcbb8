//! Thin wrappers over axum's extractors whose rejections render as [`ApiError`]
//! envelopes instead of axum's plain-text bodies.

use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// JSON body; malformed or missing bodies are unprocessable.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Path parameters; unparsable segments are not found.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

/// Query string; unparsable values are not found.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);
