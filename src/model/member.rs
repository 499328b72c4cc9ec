use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddressDto {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

/// Creation request of the v2 member API. Only the name is accepted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMemberDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMemberResponseDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMemberDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberDto {
    pub name: String,
}

/// Envelope for list responses so fields such as `count` can be added without
/// turning a top-level JSON array into an object.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberListDto {
    pub count: usize,
    pub data: Vec<MemberDto>,
}

/// OpenAPI shape of a stored `member` row, as accepted and returned by the v1 API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberEntityDto {
    #[schema(read_only)]
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
}
