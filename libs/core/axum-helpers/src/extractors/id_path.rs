//! Entity identifier path parameter.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use entity_id::{EntityId, InvalidIdentifier};

/// The single path parameter, trimmed and required to be non-empty.
///
/// A missing or blank parameter is rejected with 400. Decoding is left to the
/// handler through [`IdPath::parse`], since what an undecodable identifier
/// means (absent row, failed write) depends on the operation.
///
/// ```ignore
/// async fn get_product(path: IdPath) -> Result<String, AppError> {
///     let id = path.parse().map_err(|_| AppError::NotFound("Product not found".into()))?;
///     Ok(format!("Product ID: {}", id))
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPath(pub String);

impl IdPath {
    pub fn parse(&self) -> Result<EntityId, InvalidIdentifier> {
        EntityId::parse(&self.0)
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidId(InvalidIdentifier(e.body_text())))?;

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::InvalidId(InvalidIdentifier(
                "identifier is required".to_string(),
            )));
        }
        Ok(IdPath(raw.to_string()))
    }
}
