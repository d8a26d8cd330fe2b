use async_trait::async_trait;
use entity_id::EntityId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductQuery, SortOrder, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations: [`crate::sql::SqlProductRepository`] for a real database and
/// [`InMemoryProductRepository`] for tests and local experiments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Products ordered by creation time, optionally windowed
    async fn find_all(&self, query: ProductQuery) -> ProductResult<Vec<Product>>;

    /// Get a product by ID, `NotFound` if absent
    async fn find_by_id(&self, id: EntityId) -> ProductResult<Product>;

    /// Apply the supplied fields to an existing product
    async fn update(&self, id: EntityId, changes: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID, `NotFound` if absent
    async fn delete(&self, id: EntityId) -> ProductResult<()>;
}

/// Ordering shared by every implementation: `created_at`, then `id`, same direction
pub(crate) fn sort_products(products: &mut [Product], sort: SortOrder) {
    products.sort_by(|a, b| {
        let ord = a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id));
        match sort {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// In-memory implementation of ProductRepository
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<EntityId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find_all(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        sort_products(&mut all, query.sort);

        Ok(match query.window() {
            Some((offset, limit)) => all
                .into_iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => all,
        })
    }

    async fn find_by_id(&self, id: EntityId) -> ProductResult<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(ProductError::NotFound(id))
    }

    async fn update(&self, id: EntityId, changes: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.apply_update(changes)?;
        tracing::info!(product_id = %id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: EntityId) -> ProductResult<()> {
        let mut products = self.products.write().await;
        products.remove(&id).ok_or(ProductError::NotFound(id))?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
