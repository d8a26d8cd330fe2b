use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            name: model.name,
            price: model.price,
            created_at: model.created_at.into(),
        }
    }
}

impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            id: Set(product.id.as_uuid()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at.into()),
        }
    }
}
