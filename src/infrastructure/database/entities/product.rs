//! Product entity for database

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Product gender
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Gender {
    #[sea_orm(string_value = "men")]
    Men,
    #[sea_orm(string_value = "women")]
    Women,
    #[sea_orm(string_value = "kids")]
    Kids,
    #[sea_orm(string_value = "unisex")]
    Unisex,
}

/// Ordered list of strings stored as a JSON array (sizes, tags)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// Product model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique, column_type = "Text")]
    pub title: String,

    pub price: f64,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(unique, column_type = "Text")]
    pub slug: String,

    pub stock: i32,

    #[sea_orm(column_type = "Json")]
    pub sizes: StringList,

    pub gender: Gender,

    #[sea_orm(column_type = "Json")]
    pub tags: StringList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_image::Entity")]
    Images,
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
