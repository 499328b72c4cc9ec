//! Order endpoints.
//!
//! The listing versions return the same orders and differ only in how they are
//! loaded:
//!
//! - v1: raw entity graphs, every association loaded lazily (1 + 3N + M statements)
//! - v2: DTOs from lazily loaded graphs (1 + 3N + M)
//! - v3: DTOs from a single collection join, de-duplicated in memory (1)
//! - v3.1: paged to-one join, lines batch fetched with `IN` lists (1 + 2 per batch)
//! - v4: projection rows, lines queried per order (1 + N)
//! - v5: projection rows, lines queried with one `IN` list (2)
//! - v6: one flat projection grouped in memory (1)

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        order::{OrderDto, OrderQueryDto, OrderStatusDto, PlaceOrderDto, PlaceOrderResponseDto},
    },
    server::{
        error::AppError,
        model::{
            order::{Order, OrderGraph, OrderSearch, OrderStatus, PlaceOrderParams},
            order_query::OrderQuery,
        },
        service::{order::OrderService, order_query::OrderQueryService},
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearchParams {
    pub member_name: Option<String>,
    pub order_status: Option<OrderStatusDto>,
}

impl OrderSearchParams {
    pub fn into_search(self) -> OrderSearch {
        OrderSearch {
            member_name: self.member_name,
            order_status: self.order_status.map(OrderStatus::from_dto),
        }
    }
}

/// Paging window of v3.1, bounded to `u32` so it always binds as an SQLite integer.
#[derive(Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

/// Place an order for one item.
///
/// # Returns
/// - `201 Created` - Id of the new order
/// - `400 Bad Request` - Count is not positive
/// - `404 Not Found` - Member or item does not exist
/// - `422 Unprocessable Entity` - Not enough stock
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    request_body = PlaceOrderDto,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponseDto),
        (status = 400, description = "Invalid count", body = ErrorDto),
        (status = 404, description = "Member or item not found", body = ErrorDto),
        (status = 422, description = "Not enough stock", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let order_id = service.place(PlaceOrderParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(PlaceOrderResponseDto { order_id })))
}

/// Cancel an order and restore the stock of its lines.
///
/// # Returns
/// - `204 No Content` - Order cancelled
/// - `404 Not Found` - No such order
/// - `422 Unprocessable Entity` - Already cancelled or already delivered
#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Order cancelled"),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 422, description = "Order cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    service.cancel(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = ORDER_TAG,
    params(
        ("memberName" = Option<String>, Query, description = "Substring of the member name"),
        ("orderStatus" = Option<OrderStatusDto>, Query, description = "Only orders with this status")
    ),
    responses(
        (status = 200, description = "Stored order rows with their associations"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v1(
    State(state): State<AppState>,
    Query(params): Query<OrderSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders: Vec<_> = service
        .find_order_entities(&params.into_search())
        .await?
        .into_iter()
        .map(OrderGraph::into_entity_dto)
        .collect();

    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/v2/orders",
    tag = ORDER_TAG,
    params(
        ("memberName" = Option<String>, Query, description = "Substring of the member name"),
        ("orderStatus" = Option<OrderStatusDto>, Query, description = "Only orders with this status")
    ),
    responses(
        (status = 200, description = "Orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v2(
    State(state): State<AppState>,
    Query(params): Query<OrderSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.find_orders(&params.into_search()).await?;

    Ok(Json(into_order_dtos(orders)))
}

#[utoipa::path(
    get,
    path = "/api/v3/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v3(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.find_orders_with_items().await?;

    Ok(Json(into_order_dtos(orders)))
}

#[utoipa::path(
    get,
    path = "/api/v3.1/orders",
    tag = ORDER_TAG,
    params(
        ("offset" = Option<u32>, Query, description = "Orders to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum orders to return (default: 100)")
    ),
    responses(
        (status = 200, description = "A page of orders", body = Vec<OrderDto>),
        (status = 400, description = "Offset or limit is not a valid u32", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v3_page(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let service = OrderService::new(&state.db);

    let orders = service
        .find_orders_paged(
            u64::from(params.offset),
            u64::from(params.limit),
            state.batch_fetch_size,
        )
        .await?;

    Ok(Json(into_order_dtos(orders)))
}

#[utoipa::path(
    get,
    path = "/api/v4/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders", body = Vec<OrderQueryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v4(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OrderQueryService::new(&state.db);

    let orders = service.find_order_queries().await?;

    Ok(Json(into_order_query_dtos(orders)))
}

#[utoipa::path(
    get,
    path = "/api/v5/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders", body = Vec<OrderQueryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v5(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OrderQueryService::new(&state.db);

    let orders = service.find_order_queries_optimized().await?;

    Ok(Json(into_order_query_dtos(orders)))
}

#[utoipa::path(
    get,
    path = "/api/v6/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders", body = Vec<OrderQueryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn orders_v6(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = OrderQueryService::new(&state.db);

    let orders = service.find_order_queries_flat().await?;

    Ok(Json(into_order_query_dtos(orders)))
}

fn into_order_dtos(orders: Vec<Order>) -> Vec<OrderDto> {
    orders.into_iter().map(Order::into_dto).collect()
}

fn into_order_query_dtos(orders: Vec<OrderQuery>) -> Vec<OrderQueryDto> {
    orders.into_iter().map(OrderQuery::into_dto).collect()
}
