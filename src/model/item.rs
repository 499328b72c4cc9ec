use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subtype-specific item fields, tagged by `type`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemDetailsDto {
    Book {
        author: Option<String>,
        isbn: Option<String>,
    },
    Album {
        artist: Option<String>,
        etc: Option<String>,
    },
    Movie {
        director: Option<String>,
        actor: Option<String>,
    },
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    #[serde(flatten)]
    pub details: ItemDetailsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateItemResponseDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    #[serde(flatten)]
    pub details: ItemDetailsDto,
}
