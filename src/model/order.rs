use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::AddressDto;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatusDto {
    Order,
    Cancel,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderDto {
    pub member_id: i32,
    pub item_id: i32,
    pub count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponseDto {
    pub order_id: i32,
}

/// Order with its to-one associations only.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderDto {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: Option<AddressDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

/// Order projected from fully loaded entities.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: Option<AddressDto>,
    pub order_items: Vec<OrderItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemQueryDto {
    #[serde(skip)]
    pub order_id: i32,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

/// Order built directly from query rows, without entities.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderQueryDto {
    pub order_id: i32,
    pub name: String,
    pub order_date: DateTime<Utc>,
    pub order_status: OrderStatusDto,
    pub address: Option<AddressDto>,
    pub order_items: Vec<OrderItemQueryDto>,
}

/// Raw entity exposure: the order row with its to-one rows attached.
///
/// Field names follow the table columns, so any schema change leaks into the API.
#[derive(Serialize, Clone, Debug)]
pub struct SimpleOrderEntityDto {
    #[serde(flatten)]
    pub order: entity::order::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
}

#[derive(Serialize, Clone, Debug)]
pub struct OrderItemEntityDto {
    #[serde(flatten)]
    pub order_item: entity::order_item::Model,
    pub item: entity::item::Model,
}

/// Raw entity exposure of a whole order graph.
#[derive(Serialize, Clone, Debug)]
pub struct OrderEntityDto {
    #[serde(flatten)]
    pub order: entity::order::Model,
    pub member: entity::member::Model,
    pub delivery: entity::delivery::Model,
    pub order_items: Vec<OrderItemEntityDto>,
}
