//! Order repository.
//!
//! Besides plain CRUD this repository carries one method per loading strategy used by
//! the order listings. They all return the same [`OrderGraph`] shape and differ only in
//! how many statements they issue:
//!
//! | Method | Statements for N orders / M lines |
//! |---|---|
//! | [`OrderRepository::find_graphs_lazily`] | 1 + 3N + M |
//! | [`OrderRepository::find_simple_graphs_lazily`] | 1 + 2N |
//! | [`OrderRepository::find_all_with_member_delivery`] | 1 |
//! | [`OrderRepository::find_all_with_items`] | 1 |
//! | [`OrderRepository::find_graphs_paged`] | 1 + 2 per batch |

use std::collections::HashMap;

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, JoinType, ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::select_prefixed,
    model::order::{
        CreateOrderItemParams, CreateOrderParams, OrderGraph, OrderJoinRow, OrderLineJoinRow,
        OrderSearch, OrderStatus, SimpleOrderGraph, DELIVERY_PREFIX, ITEM_PREFIX, MEMBER_PREFIX,
        ORDER_ITEM_PREFIX, ORDER_PREFIX,
    },
};

/// Upper bound on the number of orders a search returns.
pub const MAX_SEARCH_RESULTS: u64 = 1000;

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOrderParams) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            delivery_id: ActiveValue::Set(params.delivery_id),
            order_date: ActiveValue::Set(params.order_date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn create_order_item(
        &self,
        params: CreateOrderItemParams,
    ) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            item_id: ActiveValue::Set(params.item_id),
            order_price: ActiveValue::Set(params.order_price),
            count: ActiveValue::Set(params.count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Sets the status of an order, returning whether a row was updated
    pub async fn update_status(&self, id: i32, status: OrderStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::Status, Expr::value(status.as_str()))
            .filter(entity::order::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Orders matching the search, oldest first, capped at [`MAX_SEARCH_RESULTS`].
    ///
    /// Only the order rows are selected; the member table is joined solely to filter
    /// by name.
    pub async fn find_all_by_search(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find();

        if let Some(status) = search.order_status {
            query = query.filter(entity::order::Column::Status.eq(status.as_str()));
        }

        if let Some(name) = search.member_name.as_deref().filter(|n| !n.is_empty()) {
            query = query
                .join(JoinType::InnerJoin, entity::order::Relation::Member.def())
                .filter(entity::member::Column::Name.contains(name));
        }

        query
            .order_by_asc(entity::order::Column::Id)
            .limit(MAX_SEARCH_RESULTS)
            .all(self.db)
            .await
    }

    pub async fn find_member(
        &self,
        order: &entity::order::Model,
    ) -> Result<entity::member::Model, DbErr> {
        order
            .find_related(entity::prelude::Member)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Member {} of order {} not found",
                order.member_id, order.id
            )))
    }

    pub async fn find_delivery(
        &self,
        order: &entity::order::Model,
    ) -> Result<entity::delivery::Model, DbErr> {
        order
            .find_related(entity::prelude::Delivery)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Delivery {} of order {} not found",
                order.delivery_id, order.id
            )))
    }

    pub async fn find_order_items(
        &self,
        order: &entity::order::Model,
    ) -> Result<Vec<entity::order_item::Model>, DbErr> {
        order
            .find_related(entity::prelude::OrderItem)
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_item(
        &self,
        order_item: &entity::order_item::Model,
    ) -> Result<entity::item::Model, DbErr> {
        order_item
            .find_related(entity::prelude::Item)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Item {} of order line {} not found",
                order_item.item_id, order_item.id
            )))
    }

    /// Walks every association of `order` one statement at a time.
    ///
    /// Issues 3 + M statements for an order with M lines.
    pub async fn load_graph(&self, order: entity::order::Model) -> Result<OrderGraph, DbErr> {
        let member = self.find_member(&order).await?;
        let delivery = self.find_delivery(&order).await?;

        let mut order_items = Vec::new();
        for order_item in self.find_order_items(&order).await? {
            let item = self.find_item(&order_item).await?;
            order_items.push((order_item, item));
        }

        Ok(OrderGraph {
            order,
            member,
            delivery,
            order_items,
        })
    }

    /// Loads one order with all of its associations, lazily.
    pub async fn find_graph_by_id(&self, id: i32) -> Result<Option<OrderGraph>, DbErr> {
        match self.find_by_id(id).await? {
            Some(order) => Ok(Some(self.load_graph(order).await?)),
            None => Ok(None),
        }
    }

    /// Searches orders and then loads each association per order.
    ///
    /// This is the N+1 pattern: 1 + 3N + M statements.
    pub async fn find_graphs_lazily(&self, search: &OrderSearch) -> Result<Vec<OrderGraph>, DbErr> {
        let orders = self.find_all_by_search(search).await?;

        let mut graphs = Vec::with_capacity(orders.len());
        for order in orders {
            graphs.push(self.load_graph(order).await?);
        }

        Ok(graphs)
    }

    /// Searches orders and then loads member and delivery per order: 1 + 2N statements.
    pub async fn find_simple_graphs_lazily(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<SimpleOrderGraph>, DbErr> {
        let orders = self.find_all_by_search(search).await?;

        let mut graphs = Vec::with_capacity(orders.len());
        for order in orders {
            let member = self.find_member(&order).await?;
            let delivery = self.find_delivery(&order).await?;
            graphs.push(SimpleOrderGraph {
                order,
                member,
                delivery,
            });
        }

        Ok(graphs)
    }

    /// Orders joined with their member and delivery in a single statement.
    ///
    /// Both joins are to-one, so each order yields exactly one row and `offset`/`limit`
    /// page over orders.
    pub async fn find_all_with_member_delivery(
        &self,
        offset: u64,
        limit: Option<u64>,
    ) -> Result<Vec<OrderJoinRow>, DbErr> {
        let select = entity::prelude::Order::find().select_only();
        let select = select_prefixed::<entity::order::Entity, _>(select, ORDER_PREFIX);
        let select = select_prefixed::<entity::member::Entity, _>(select, MEMBER_PREFIX);
        let select = select_prefixed::<entity::delivery::Entity, _>(select, DELIVERY_PREFIX);

        select
            .join(JoinType::InnerJoin, entity::order::Relation::Member.def())
            .join(JoinType::InnerJoin, entity::order::Relation::Delivery.def())
            .order_by_asc(entity::order::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_model::<OrderJoinRow>()
            .all(self.db)
            .await
    }

    /// Orders joined with member, delivery, lines and items in a single statement.
    ///
    /// The line join is to-many: every order is repeated once per line and the
    /// duplicates are folded back together here. Orders without lines are dropped by
    /// the inner join. Paging this statement would page over lines, not orders, so it
    /// takes no offset or limit.
    pub async fn find_all_with_items(&self) -> Result<Vec<OrderGraph>, DbErr> {
        let select = entity::prelude::Order::find().select_only();
        let select = select_prefixed::<entity::order::Entity, _>(select, ORDER_PREFIX);
        let select = select_prefixed::<entity::member::Entity, _>(select, MEMBER_PREFIX);
        let select = select_prefixed::<entity::delivery::Entity, _>(select, DELIVERY_PREFIX);
        let select = select_prefixed::<entity::order_item::Entity, _>(select, ORDER_ITEM_PREFIX);
        let select = select_prefixed::<entity::item::Entity, _>(select, ITEM_PREFIX);

        let rows = select
            .join(JoinType::InnerJoin, entity::order::Relation::Member.def())
            .join(JoinType::InnerJoin, entity::order::Relation::Delivery.def())
            .join(JoinType::InnerJoin, entity::order::Relation::OrderItem.def())
            .join(JoinType::InnerJoin, entity::order_item::Relation::Item.def())
            .order_by_asc(entity::order::Column::Id)
            .order_by_asc(entity::order_item::Column::Id)
            .into_model::<OrderLineJoinRow>()
            .all(self.db)
            .await?;

        let row_count = rows.len();
        let mut graphs: Vec<OrderGraph> = Vec::new();
        for row in rows {
            match graphs.last_mut() {
                Some(graph) if graph.order.id == row.order.id => {
                    graph.order_items.push((row.order_item, row.item));
                }
                _ => graphs.push(OrderGraph {
                    order: row.order,
                    member: row.member,
                    delivery: row.delivery,
                    order_items: vec![(row.order_item, row.item)],
                }),
            }
        }

        tracing::debug!(
            "Collection join returned {} rows for {} orders",
            row_count,
            graphs.len()
        );

        Ok(graphs)
    }

    /// Lines of the given orders, fetched with one `IN` list per `batch_size` ids.
    pub async fn find_order_items_batched(
        &self,
        order_ids: &[i32],
        batch_size: usize,
    ) -> Result<Vec<entity::order_item::Model>, DbErr> {
        let mut order_items = Vec::new();
        for chunk in order_ids.chunks(batch_size.max(1)) {
            order_items.extend(
                entity::prelude::OrderItem::find()
                    .filter(entity::order_item::Column::OrderId.is_in(chunk.iter().copied()))
                    .order_by_asc(entity::order_item::Column::Id)
                    .all(self.db)
                    .await?,
            );
        }

        Ok(order_items)
    }

    /// Items with the given ids, fetched with one `IN` list per `batch_size` ids.
    pub async fn find_items_batched(
        &self,
        item_ids: &[i32],
        batch_size: usize,
    ) -> Result<Vec<entity::item::Model>, DbErr> {
        let mut items = Vec::new();
        for chunk in item_ids.chunks(batch_size.max(1)) {
            items.extend(
                entity::prelude::Item::find()
                    .filter(entity::item::Column::Id.is_in(chunk.iter().copied()))
                    .all(self.db)
                    .await?,
            );
        }

        Ok(items)
    }

    /// A page of orders with member and delivery joined, lines and items batch fetched.
    ///
    /// Issues one statement for the page plus one per `batch_size` chunk of order ids
    /// and one per chunk of distinct item ids.
    pub async fn find_graphs_paged(
        &self,
        offset: u64,
        limit: u64,
        batch_size: usize,
    ) -> Result<Vec<OrderGraph>, DbErr> {
        let rows = self
            .find_all_with_member_delivery(offset, Some(limit))
            .await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = rows.iter().map(|row| row.order.id).collect();
        let order_items = self
            .find_order_items_batched(&order_ids, batch_size)
            .await?;

        let mut item_ids: Vec<i32> = order_items.iter().map(|oi| oi.item_id).collect();
        item_ids.sort_unstable();
        item_ids.dedup();
        let items: HashMap<i32, entity::item::Model> = self
            .find_items_batched(&item_ids, batch_size)
            .await?
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        let mut lines_by_order: HashMap<i32, Vec<(entity::order_item::Model, entity::item::Model)>> =
            HashMap::new();
        for order_item in order_items {
            let item = items.get(&order_item.item_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Item {} of order line {} not found",
                    order_item.item_id, order_item.id
                ))
            })?;
            lines_by_order
                .entry(order_item.order_id)
                .or_default()
                .push((order_item, item));
        }

        Ok(rows
            .into_iter()
            .map(|row| OrderGraph {
                order_items: lines_by_order.remove(&row.order.id).unwrap_or_default(),
                order: row.order,
                member: row.member,
                delivery: row.delivery,
            })
            .collect())
    }
}
