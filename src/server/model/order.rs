//! Order domain models, entity graphs and parameters.
//!
//! An order aggregate spans five tables. Repositories hand the rows back as
//! [`OrderGraph`] / [`SimpleOrderGraph`] bundles regardless of the loading strategy
//! (lazy per-association queries, join fetches or batched `IN` lists); the services
//! turn those into [`Order`] / [`SimpleOrder`] domain values.

use chrono::{DateTime, Utc};
use sea_orm::{DbErr, FromQueryResult, QueryResult};

use crate::{
    model::order::{
        OrderDto, OrderEntityDto, OrderItemDto, OrderItemEntityDto, OrderStatusDto,
        PlaceOrderDto, SimpleOrderDto, SimpleOrderEntityDto,
    },
    server::{
        error::{internal::InternalError, order::OrderError, AppError},
        model::{
            address::Address,
            delivery::{Delivery, DeliveryStatus},
            item::Item,
            member::Member,
        },
    },
};

/// Column alias prefixes used when several entities are selected in one statement.
pub const ORDER_PREFIX: &str = "o_";
pub const MEMBER_PREFIX: &str = "m_";
pub const DELIVERY_PREFIX: &str = "d_";
pub const ORDER_ITEM_PREFIX: &str = "oi_";
pub const ITEM_PREFIX: &str = "i_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Order,
    Cancel,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "ORDER",
            Self::Cancel => "CANCEL",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "ORDER" => Ok(Self::Order),
            "CANCEL" => Ok(Self::Cancel),
            other => Err(InternalError::UnknownOrderStatus(other.to_string())),
        }
    }

    pub fn from_dto(dto: OrderStatusDto) -> Self {
        match dto {
            OrderStatusDto::Order => Self::Order,
            OrderStatusDto::Cancel => Self::Cancel,
        }
    }

    pub fn into_dto(self) -> OrderStatusDto {
        match self {
            Self::Order => OrderStatusDto::Order,
            Self::Cancel => OrderStatusDto::Cancel,
        }
    }
}

/// Optional filters for order searches. An empty search matches every order.
#[derive(Debug, Clone, Default)]
pub struct OrderSearch {
    /// Substring of the member name.
    pub member_name: Option<String>,
    pub order_status: Option<OrderStatus>,
}

/// Every row of one order aggregate, however it was loaded.
#[derive(Debug, Clone)]
pub struct OrderGraph {
    pub order: entity::order::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
    /// Lines in insertion order, each with the item it references.
    pub order_items: Vec<(entity::order_item::Model, entity::item::Model)>,
}

impl OrderGraph {
    /// Exposes the raw rows as they are stored.
    pub fn into_entity_dto(self) -> OrderEntityDto {
        OrderEntityDto {
            order: self.order,
            member: self.member,
            delivery: self.delivery,
            order_items: self
                .order_items
                .into_iter()
                .map(|(order_item, item)| OrderItemEntityDto { order_item, item })
                .collect(),
        }
    }
}

/// An order with its to-one associations only.
#[derive(Debug, Clone)]
pub struct SimpleOrderGraph {
    pub order: entity::order::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
}

impl SimpleOrderGraph {
    pub fn into_entity_dto(self) -> SimpleOrderEntityDto {
        SimpleOrderEntityDto {
            order: self.order,
            member: self.member,
            delivery: self.delivery,
        }
    }
}

/// Order, member and delivery selected in one statement under prefixed aliases.
#[derive(Debug, Clone)]
pub struct OrderJoinRow {
    pub order: entity::order::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
}

impl FromQueryResult for OrderJoinRow {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            order: entity::order::Model::from_query_result(res, ORDER_PREFIX)?,
            member: entity::member::Model::from_query_result(res, MEMBER_PREFIX)?,
            delivery: entity::delivery::Model::from_query_result(res, DELIVERY_PREFIX)?,
        })
    }
}

impl OrderJoinRow {
    pub fn into_simple_graph(self) -> SimpleOrderGraph {
        SimpleOrderGraph {
            order: self.order,
            member: self.member,
            delivery: self.delivery,
        }
    }
}

/// One row of the collection join: an order repeated once per line.
#[derive(Debug, Clone)]
pub struct OrderLineJoinRow {
    pub order: entity::order::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
    pub order_item: entity::order_item::Model,
    pub item: entity::item::Model,
}

impl FromQueryResult for OrderLineJoinRow {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            order: entity::order::Model::from_query_result(res, ORDER_PREFIX)?,
            member: entity::member::Model::from_query_result(res, MEMBER_PREFIX)?,
            delivery: entity::delivery::Model::from_query_result(res, DELIVERY_PREFIX)?,
            order_item: entity::order_item::Model::from_query_result(res, ORDER_ITEM_PREFIX)?,
            item: entity::item::Model::from_query_result(res, ITEM_PREFIX)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: i32,
    pub item: Item,
    /// Unit price captured when the order was placed.
    pub order_price: i32,
    pub count: i32,
}

impl OrderItem {
    /// Widened to `i64`: both factors are `i32` and their product need not fit one.
    pub fn total_price(&self) -> i64 {
        i64::from(self.order_price) * i64::from(self.count)
    }

    /// Gives the reserved units back to the item.
    pub fn cancel(&mut self) {
        self.item.add_stock(self.count);
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            item_name: self.item.name,
            order_price: self.order_price,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub member: Member,
    pub delivery: Delivery,
    pub order_items: Vec<OrderItem>,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    pub fn from_graph(graph: OrderGraph) -> Result<Self, InternalError> {
        let order_items = graph
            .order_items
            .into_iter()
            .map(|(order_item, item)| {
                Ok(OrderItem {
                    id: order_item.id,
                    item: Item::from_entity(item)?,
                    order_price: order_item.order_price,
                    count: order_item.count,
                })
            })
            .collect::<Result<Vec<_>, InternalError>>()?;

        Ok(Self {
            id: graph.order.id,
            member: Member::from_entity(graph.member),
            delivery: Delivery::from_entity(graph.delivery)?,
            order_items,
            order_date: graph.order.order_date,
            status: OrderStatus::parse(&graph.order.status)?,
        })
    }

    /// Sum of `order_price * count` over every line.
    pub fn total_price(&self) -> i64 {
        self.order_items.iter().map(OrderItem::total_price).sum()
    }

    /// Cancels the order and restores the stock of every line.
    ///
    /// # Returns
    /// - `Ok(())` - Status is now `CANCEL`, item stock incremented by each line's count
    /// - `Err(OrderError::AlreadyDelivered)` - The delivery is complete
    /// - `Err(OrderError::AlreadyCancelled)` - The order was cancelled before
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if self.delivery.status == DeliveryStatus::Comp {
            return Err(OrderError::AlreadyDelivered(self.id));
        }
        if self.status == OrderStatus::Cancel {
            return Err(OrderError::AlreadyCancelled(self.id));
        }

        self.status = OrderStatus::Cancel;
        for order_item in &mut self.order_items {
            order_item.cancel();
        }

        Ok(())
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            order_id: self.id,
            name: self.member.name,
            order_date: self.order_date,
            order_status: self.status.into_dto(),
            address: self.delivery.address.map(Address::into_dto),
            order_items: self
                .order_items
                .into_iter()
                .map(OrderItem::into_dto)
                .collect(),
        }
    }
}

/// Order summary built from the order and its to-one associations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleOrder {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub address: Option<Address>,
}

impl SimpleOrder {
    pub fn from_graph(graph: SimpleOrderGraph) -> Result<Self, InternalError> {
        Ok(Self {
            order_id: graph.order.id,
            name: graph.member.name,
            order_date: graph.order.order_date,
            status: OrderStatus::parse(&graph.order.status)?,
            address: Address::from_columns(
                graph.delivery.city,
                graph.delivery.street,
                graph.delivery.zipcode,
            ),
        })
    }

    pub fn into_dto(self) -> SimpleOrderDto {
        SimpleOrderDto {
            order_id: self.order_id,
            name: self.name,
            order_date: self.order_date,
            order_status: self.status.into_dto(),
            address: self.address.map(Address::into_dto),
        }
    }
}

/// Row values for a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub member_id: i32,
    pub delivery_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Row values for a new order line.
#[derive(Debug, Clone)]
pub struct CreateOrderItemParams {
    pub order_id: i32,
    pub item_id: i32,
    pub order_price: i32,
    pub count: i32,
}

#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub member_id: i32,
    pub item_id: i32,
    pub count: i32,
}

impl PlaceOrderParams {
    pub fn from_dto(dto: PlaceOrderDto) -> Self {
        Self {
            member_id: dto.member_id,
            item_id: dto.item_id,
            count: dto.count,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.count <= 0 {
            return Err(AppError::BadRequest(
                "Order count must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
