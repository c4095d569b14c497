/// Request body extraction
///
/// [`ApiJson`] wraps Axum's `Json` extractor so that a malformed or
/// incomplete request body surfaces as an [`ApiError`] (400) instead of
/// the extractor's default 422 rejection. Handlers that need a different
/// error for a bad body (the token endpoint) take
/// `Result<Json<T>, JsonRejection>` directly.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejection is an [`ApiError`]
///
/// A missing field, invalid JSON, or wrong content type all map to a
/// 400 validation error before the handler body runs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
