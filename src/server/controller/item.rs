use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        item::{CreateItemDto, CreateItemResponseDto, ItemDto, UpdateItemDto},
    },
    server::{
        error::AppError,
        model::item::{CreateItemParams, Item, UpdateItemParams},
        service::item::ItemService,
        state::AppState,
    },
};

/// Tag for grouping item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

/// Create a book, album or movie.
///
/// The `type` field selects the subtype and which of the subtype fields are stored.
///
/// # Returns
/// - `201 Created` - Id of the new item
/// - `400 Bad Request` - Empty name, negative price or negative stock
#[utoipa::path(
    post,
    path = "/api/v1/items",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = CreateItemResponseDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service.save(CreateItemParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(CreateItemResponseDto { id: item.id })))
}

#[utoipa::path(
    get,
    path = "/api/v1/items",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "All items", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let items: Vec<ItemDto> = service
        .find_items()
        .await?
        .into_iter()
        .map(Item::into_dto)
        .collect();

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

    Ok(Json(item.into_dto()))
}

/// Update the name, price and stock of an item.
///
/// The subtype and its fields cannot be changed.
#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 400, description = "Invalid item data", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ItemService::new(&state.db);

    let item = service
        .update(UpdateItemParams::from_dto(id, payload))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item {} not found", id)))?;

    Ok(Json(item.into_dto()))
}
