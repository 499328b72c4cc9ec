//! Order endpoints limited to the to-one associations (member and delivery).

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, order::SimpleOrderDto},
    server::{
        error::AppError,
        model::order::{OrderSearch, SimpleOrder, SimpleOrderGraph},
        service::{order::OrderService, order_query::OrderQueryService},
        state::AppState,
    },
};

/// Tag for grouping simple order endpoints in OpenAPI documentation
pub static SIMPLE_ORDER_TAG: &str = "simple-order";

/// Raw order rows with member and delivery, loaded lazily (1 + 2N statements).
#[utoipa::path(
    get,
    path = "/api/v1/simple-orders",
    tag = SIMPLE_ORDER_TAG,
    responses(
        (status = 200, description = "Stored order rows with member and delivery"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn simple_orders_v1(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders: Vec<_> = service
        .find_simple_order_entities(&OrderSearch::default())
        .await?
        .into_iter()
        .map(SimpleOrderGraph::into_entity_dto)
        .collect();

    Ok(Json(orders))
}

/// Order summaries from lazily loaded associations (1 + 2N statements).
#[utoipa::path(
    get,
    path = "/api/v2/simple-orders",
    tag = SIMPLE_ORDER_TAG,
    responses(
        (status = 200, description = "Order summaries", body = Vec<SimpleOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn simple_orders_v2(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.find_simple_orders(&OrderSearch::default()).await?;

    Ok(Json(into_dtos(orders)))
}

/// Order summaries from a single to-one join (1 statement).
#[utoipa::path(
    get,
    path = "/api/v3/simple-orders",
    tag = SIMPLE_ORDER_TAG,
    responses(
        (status = 200, description = "Order summaries", body = Vec<SimpleOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn simple_orders_v3(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderService::new(&state.db);

    let orders = service.find_simple_orders_with_member_delivery().await?;

    Ok(Json(into_dtos(orders)))
}

/// Order summaries projected column by column (1 statement).
#[utoipa::path(
    get,
    path = "/api/v4/simple-orders",
    tag = SIMPLE_ORDER_TAG,
    responses(
        (status = 200, description = "Order summaries", body = Vec<SimpleOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn simple_orders_v4(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = OrderQueryService::new(&state.db);

    let orders = service.find_simple_order_queries().await?;

    Ok(Json(into_dtos(orders)))
}

fn into_dtos(orders: Vec<SimpleOrder>) -> Vec<SimpleOrderDto> {
    orders.into_iter().map(SimpleOrder::into_dto).collect()
}
