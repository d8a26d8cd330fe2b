//! JSON body extractor with uniform 400 rejections.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Decodes the request body as JSON whatever the `Content-Type` header says.
///
/// Only an unreadable or undecodable body is rejected, always as a 400 with
/// the standard error body (no 415/422 split as with [`axum::Json`]).
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateProduct>) -> StatusCode { .. }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidJson(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::InvalidJson(e.to_string()))
    }
}
