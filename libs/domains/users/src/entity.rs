use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::User;

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id.as_uuid()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
        }
    }
}
