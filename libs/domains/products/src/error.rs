use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use entity_id::EntityId;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("id is required")]
    IdRequired,

    #[error("invalid id: '{0}'")]
    InvalidId(String),

    #[error("name is required")]
    NameRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,

    #[error("Product not found: {0}")]
    NotFound(EntityId),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Default HTTP mapping; individual handlers may narrow it further
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::Database(e) => AppError::Database(e),
            validation => AppError::Validation(validation.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
