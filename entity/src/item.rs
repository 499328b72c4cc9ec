use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Single-table item hierarchy.
///
/// `dtype` is `B` (book), `A` (album) or `M` (movie); only the subtype's own
/// columns are populated for a given row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dtype: String,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub artist: Option<String>,
    pub etc: Option<String>,
    pub director: Option<String>,
    pub actor: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
