//! Products Domain
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Entity construction, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SeaORM and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, request bodies, listing query
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, ProductService, SqlProductRepository};
//!
//! # async fn example(db: sea_orm::DatabaseConnection) {
//! let service = ProductService::new(SqlProductRepository::new(db));
//! let router: axum::Router = handlers::router(service);
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, ListParams, Product, ProductQuery, SortOrder, UpdateProduct};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use sql::SqlProductRepository;
