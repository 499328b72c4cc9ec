//! Read-only order projections.
//!
//! These queries select exactly the columns the API returns and never materialize
//! entities.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

use crate::server::model::order_query::{OrderFlatRow, OrderItemQueryRow, OrderQueryRow};

pub struct OrderQueryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderQueryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Root columns of every order in one statement, oldest first
    pub async fn find_order_rows(&self) -> Result<Vec<OrderQueryRow>, DbErr> {
        root_columns(entity::prelude::Order::find().select_only())
            .join(JoinType::InnerJoin, entity::order::Relation::Member.def())
            .join(JoinType::InnerJoin, entity::order::Relation::Delivery.def())
            .order_by_asc(entity::order::Column::Id)
            .into_model::<OrderQueryRow>()
            .all(self.db)
            .await
    }

    /// Line columns of a single order
    pub async fn find_order_item_rows(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderItemQueryRow>, DbErr> {
        line_columns(entity::prelude::OrderItem::find().select_only())
            .join(JoinType::InnerJoin, entity::order_item::Relation::Item.def())
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .into_model::<OrderItemQueryRow>()
            .all(self.db)
            .await
    }

    /// Line columns of many orders in one `IN` statement
    pub async fn find_order_item_rows_in(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemQueryRow>, DbErr> {
        line_columns(entity::prelude::OrderItem::find().select_only())
            .join(JoinType::InnerJoin, entity::order_item::Relation::Item.def())
            .filter(entity::order_item::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(entity::order_item::Column::Id)
            .into_model::<OrderItemQueryRow>()
            .all(self.db)
            .await
    }

    /// Root and line columns of every order line in one statement
    pub async fn find_flat_rows(&self) -> Result<Vec<OrderFlatRow>, DbErr> {
        let select = root_columns(entity::prelude::Order::find().select_only());

        item_columns(select)
            .join(JoinType::InnerJoin, entity::order::Relation::Member.def())
            .join(JoinType::InnerJoin, entity::order::Relation::Delivery.def())
            .join(JoinType::InnerJoin, entity::order::Relation::OrderItem.def())
            .join(JoinType::InnerJoin, entity::order_item::Relation::Item.def())
            .order_by_asc(entity::order::Column::Id)
            .order_by_asc(entity::order_item::Column::Id)
            .into_model::<OrderFlatRow>()
            .all(self.db)
            .await
    }
}

fn root_columns<E: EntityTrait>(select: Select<E>) -> Select<E> {
    select
        .column_as(entity::order::Column::Id, "order_id")
        .column_as(entity::member::Column::Name, "name")
        .column_as(entity::order::Column::OrderDate, "order_date")
        .column_as(entity::order::Column::Status, "order_status")
        .column_as(entity::delivery::Column::City, "city")
        .column_as(entity::delivery::Column::Street, "street")
        .column_as(entity::delivery::Column::Zipcode, "zipcode")
}

fn line_columns<E: EntityTrait>(select: Select<E>) -> Select<E> {
    item_columns(select.column_as(entity::order_item::Column::OrderId, "order_id"))
}

/// Line columns without the owning order id, for statements that already select it.
fn item_columns<E: EntityTrait>(select: Select<E>) -> Select<E> {
    select
        .column_as(entity::item::Column::Name, "item_name")
        .column_as(entity::order_item::Column::OrderPrice, "order_price")
        .column_as(entity::order_item::Column::Count, "count")
}
