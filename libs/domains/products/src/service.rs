//! Product Service - Business logic layer

use entity_id::EntityId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductQuery, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service: builds and validates products, then delegates to the repository
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product with a fresh id and timestamp
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input.name, input.price)?;
        self.repository.create(product).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        self.repository.find_all(query).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: EntityId) -> ProductResult<Product> {
        self.repository.find_by_id(id).await
    }

    /// Validate the changes first, so a bad body never reaches storage
    #[instrument(skip(self, changes))]
    pub async fn update_product(
        &self,
        id: EntityId,
        changes: UpdateProduct,
    ) -> ProductResult<Product> {
        changes.validate()?;
        self.repository.update(id, changes).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: EntityId) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}
