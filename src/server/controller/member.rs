use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{
            CreateMemberDto, CreateMemberResponseDto, MemberDto, MemberEntityDto, MemberListDto,
            MemberSummaryDto, UpdateMemberDto,
        },
    },
    server::{
        error::AppError,
        model::member::{CreateMemberParams, Member, UpdateMemberParams},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a member from a raw member entity.
///
/// The body is the stored entity shape (`name`, `city`, `street`, `zipcode`), so any
/// change to the table changes this API contract. Kept for comparison with v2.
///
/// # Returns
/// - `200 OK` - Id of the new member
/// - `400 Bad Request` - Name is empty or the address is only partly given
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    request_body = MemberEntityDto,
    responses(
        (status = 200, description = "Member registered", body = CreateMemberResponseDto),
        (status = 400, description = "Empty name or partial address", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_member_v1(
    State(state): State<AppState>,
    Json(payload): Json<entity::member::Model>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let member = service
        .join(CreateMemberParams::from_entity(payload)?)
        .await?;

    Ok(Json(CreateMemberResponseDto { id: member.id }))
}

/// Register a member from a request DTO.
///
/// # Returns
/// - `200 OK` - Id of the new member
/// - `400 Bad Request` - Name is empty
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/v2/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 200, description = "Member registered", body = CreateMemberResponseDto),
        (status = 400, description = "Name is empty", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_member_v2(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let member = service.join(CreateMemberParams::from_dto(payload)).await?;

    Ok(Json(CreateMemberResponseDto { id: member.id }))
}

/// Rename a member.
///
/// The response is read back from the database after the update.
///
/// # Returns
/// - `200 OK` - Member id and new name
/// - `400 Bad Request` - Name is empty
/// - `404 Not Found` - No such member
#[utoipa::path(
    put,
    path = "/api/v2/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member renamed", body = MemberSummaryDto),
        (status = 400, description = "Name is empty", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_v2(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let member = service
        .update(UpdateMemberParams::from_dto(id, payload))
        .await?;

    Ok(Json(member.into_summary_dto()))
}

/// List members as raw entities.
///
/// Exposes every stored column, including the address. Kept for comparison with v2.
#[utoipa::path(
    get,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Stored member rows", body = Vec<MemberEntityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn members_v1(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    Ok(Json(service.find_member_entities().await?))
}

/// List member names wrapped in a `{ count, data }` envelope.
#[utoipa::path(
    get,
    path = "/api/v2/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Member names", body = MemberListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn members_v2(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let data: Vec<MemberDto> = service
        .find_members()
        .await?
        .into_iter()
        .map(Member::into_dto)
        .collect();

    Ok(Json(MemberListDto {
        count: data.len(),
        data,
    }))
}

/// Get a single member.
#[utoipa::path(
    get,
    path = "/api/v2/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member found", body = MemberSummaryDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn member_v2(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let member = service
        .find_one(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))?;

    Ok(Json(member.into_summary_dto()))
}
