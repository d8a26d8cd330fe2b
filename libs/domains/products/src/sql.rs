use async_trait::async_trait;
use entity_id::EntityId;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, QuerySelect,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductQuery, SortOrder, UpdateProduct},
    repository::ProductRepository,
};

/// SeaORM-backed product store (PostgreSQL or SQLite)
#[derive(Clone)]
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: EntityId) -> ProductResult<entity::Model> {
        entity::Entity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let active_model = entity::ActiveModel::from(&product);
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn find_all(&self, query: ProductQuery) -> ProductResult<Vec<Product>> {
        let mut select = match query.sort {
            SortOrder::Asc => entity::Entity::find()
                .order_by_asc(entity::Column::CreatedAt)
                .order_by_asc(entity::Column::Id),
            SortOrder::Desc => entity::Entity::find()
                .order_by_desc(entity::Column::CreatedAt)
                .order_by_desc(entity::Column::Id),
        };

        if let Some((offset, limit)) = query.window() {
            select = select.offset(offset).limit(limit);
        }

        let models = select.all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> ProductResult<Product> {
        self.find_model(id).await.map(Into::into)
    }

    async fn update(&self, id: EntityId, changes: UpdateProduct) -> ProductResult<Product> {
        let model = self.find_model(id).await?;

        let mut product: Product = model.clone().into();
        product.apply_update(changes.clone())?;

        // Only supplied columns are written
        let mut active_model = entity::ActiveModel {
            id: Unchanged(model.id),
            ..Default::default()
        };
        if let Some(name) = changes.name {
            active_model.name = Set(name);
        }
        if let Some(price) = changes.price {
            active_model.price = Set(price);
        }

        if active_model.is_changed() {
            active_model.update(&self.db).await?;
            tracing::info!(product_id = %id, "Updated product");
        }

        Ok(product)
    }

    async fn delete(&self, id: EntityId) -> ProductResult<()> {
        let model = self.find_model(id).await?;
        model.delete(&self.db).await?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}
