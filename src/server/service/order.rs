//! Order commands and the entity-based order listings.
//!
//! The listings differ only in the repository strategy they use to load the order
//! graphs; see [`crate::server::data::order`] for the statement counts.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        delivery::DeliveryRepository, item::ItemRepository, member::MemberRepository,
        order::OrderRepository,
    },
    error::AppError,
    model::{
        delivery::{CreateDeliveryParams, DeliveryStatus},
        item::Item,
        member::Member,
        order::{
            CreateOrderItemParams, CreateOrderParams, Order, OrderGraph, OrderSearch,
            OrderStatus, PlaceOrderParams, SimpleOrder, SimpleOrderGraph,
        },
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a single-line order.
    ///
    /// Runs in one transaction: reserves stock, creates a `READY` delivery at the
    /// member's address, then the order and its line priced at the item's current
    /// price. Nothing is written if any step fails.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new order
    /// - `Err(AppError::NotFound)` - Member or item does not exist
    /// - `Err(AppError::OrderErr)` - Not enough stock
    pub async fn place(&self, params: PlaceOrderParams) -> Result<i32, AppError> {
        params.validate()?;

        let txn = self.db.begin().await?;

        let member = MemberRepository::new(&txn)
            .find_by_id(params.member_id)
            .await?
            .map(Member::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", params.member_id)))?;

        let item_repo = ItemRepository::new(&txn);
        let mut item = item_repo
            .find_by_id(params.item_id)
            .await?
            .map(Item::from_entity)
            .transpose()?
            .ok_or_else(|| AppError::NotFound(format!("Item {} not found", params.item_id)))?;

        item.remove_stock(params.count)?;
        item_repo.adjust_stock(item.id, -params.count).await?;

        let delivery = DeliveryRepository::new(&txn)
            .create(CreateDeliveryParams {
                address: member.address,
                status: DeliveryStatus::Ready,
            })
            .await?;

        let order_repo = OrderRepository::new(&txn);
        let order = order_repo
            .create(CreateOrderParams {
                member_id: member.id,
                delivery_id: delivery.id,
                order_date: Utc::now(),
                status: OrderStatus::Order,
            })
            .await?;
        order_repo
            .create_order_item(CreateOrderItemParams {
                order_id: order.id,
                item_id: item.id,
                order_price: item.price,
                count: params.count,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Order {} placed by member {} for {} x item {}",
            order.id,
            member.id,
            params.count,
            item.id
        );

        Ok(order.id)
    }

    /// Cancels an order and gives every line's units back to stock, in one transaction.
    ///
    /// # Returns
    /// - `Ok(Order)` - The cancelled order
    /// - `Err(AppError::NotFound)` - Order does not exist
    /// - `Err(AppError::OrderErr)` - Order already cancelled or already delivered
    pub async fn cancel(&self, order_id: i32) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);
        let graph = order_repo
            .find_graph_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        let mut order = Order::from_graph(graph)?;
        order.cancel()?;

        order_repo.update_status(order.id, order.status).await?;

        let item_repo = ItemRepository::new(&txn);
        for order_item in &order.order_items {
            item_repo
                .adjust_stock(order_item.item.id, order_item.count)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Order {} cancelled, refunding {}",
            order.id,
            order.total_price()
        );

        Ok(order)
    }

    /// Order graphs exactly as stored, every association loaded lazily.
    pub async fn find_order_entities(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<OrderGraph>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.find_graphs_lazily(search).await?)
    }

    /// Orders with every association loaded lazily (N+1).
    pub async fn find_orders(&self, search: &OrderSearch) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        into_orders(repo.find_graphs_lazily(search).await?)
    }

    /// Orders loaded by a single collection join.
    pub async fn find_orders_with_items(&self) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        into_orders(repo.find_all_with_items().await?)
    }

    /// A page of orders; to-one associations joined, lines batch fetched.
    pub async fn find_orders_paged(
        &self,
        offset: u64,
        limit: u64,
        batch_fetch_size: usize,
    ) -> Result<Vec<Order>, AppError> {
        let repo = OrderRepository::new(self.db);

        into_orders(
            repo.find_graphs_paged(offset, limit, batch_fetch_size)
                .await?,
        )
    }

    /// Orders with member and delivery exactly as stored, loaded lazily.
    pub async fn find_simple_order_entities(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<SimpleOrderGraph>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.find_simple_graphs_lazily(search).await?)
    }

    /// Orders with member and delivery loaded lazily (N+1).
    pub async fn find_simple_orders(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<SimpleOrder>, AppError> {
        let repo = OrderRepository::new(self.db);

        into_simple_orders(repo.find_simple_graphs_lazily(search).await?)
    }

    /// Orders with member and delivery joined in one statement.
    pub async fn find_simple_orders_with_member_delivery(
        &self,
    ) -> Result<Vec<SimpleOrder>, AppError> {
        let repo = OrderRepository::new(self.db);

        let rows = repo.find_all_with_member_delivery(0, None).await?;

        into_simple_orders(rows.into_iter().map(|row| row.into_simple_graph()).collect())
    }
}

fn into_orders(graphs: Vec<OrderGraph>) -> Result<Vec<Order>, AppError> {
    graphs
        .into_iter()
        .map(|graph| Order::from_graph(graph).map_err(Into::into))
        .collect()
}

fn into_simple_orders(graphs: Vec<SimpleOrderGraph>) -> Result<Vec<SimpleOrder>, AppError> {
    graphs
        .into_iter()
        .map(|graph| SimpleOrder::from_graph(graph).map_err(Into::into))
        .collect()
}
