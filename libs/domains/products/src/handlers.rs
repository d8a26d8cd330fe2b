//! HTTP handlers for Products API
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `POST /` | 201 | 400 bad body or invalid product, 500 storage |
//! | `GET /` | 200 + array | 500 storage |
//! | `GET /{id}` | 200 + product | 400 blank id, 404 on any lookup failure |
//! | `PUT /{id}` | 200 | 400 blank id, bad body or changes; 500 storage, including missing row |
//! | `DELETE /{id}` | 200 | 400 blank id; 500 storage, including missing row |
//!
//! An id that does not decode is treated like one with no row behind it.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{AppError, IdPath, JsonBody};
use entity_id::EntityId;
use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, ListParams, Product, ProductQuery, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

fn path_id(path: &IdPath) -> ProductResult<EntityId> {
    path.parse().map_err(|_| ProductError::InvalidId(path.0.clone()))
}

/// Lookup failures of any kind read as "not found"
fn lookup_error(err: ProductError) -> AppError {
    match err {
        ProductError::NotFound(_) => err.into(),
        other => {
            tracing::error!("Product lookup failed: {}", other);
            AppError::NotFound("Product not found".to_string())
        }
    }
}

/// For mutations, a missing row (or an id that cannot name one) is a storage failure
fn mutation_error(err: ProductError) -> AppError {
    match err {
        ProductError::NotFound(id) => {
            AppError::InternalServerError(format!("Product {} not found", id))
        }
        ProductError::InvalidId(raw) => {
            AppError::InternalServerError(format!("Product {} not found", raw))
        }
        other => other.into(),
    }
}

async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = service.list_products(ProductQuery::from(params)).await?;
    Ok(Json(products))
}

async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> Result<StatusCode, AppError> {
    service.create_product(input).await?;
    Ok(StatusCode::CREATED)
}

async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    path: IdPath,
) -> Result<Json<Product>, AppError> {
    let id = path_id(&path).map_err(lookup_error)?;
    let product = service.get_product(id).await.map_err(lookup_error)?;
    Ok(Json(product))
}

async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    path: IdPath,
    JsonBody(changes): JsonBody<UpdateProduct>,
) -> Result<StatusCode, AppError> {
    let id = path_id(&path).map_err(mutation_error)?;
    service
        .update_product(id, changes)
        .await
        .map_err(mutation_error)?;
    Ok(StatusCode::OK)
}

async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    path: IdPath,
) -> Result<StatusCode, AppError> {
    let id = path_id(&path).map_err(mutation_error)?;
    service.delete_product(id).await.map_err(mutation_error)?;
    Ok(StatusCode::OK)
}
