//! Item domain model.
//!
//! Items share one table and are told apart by the `dtype` discriminator column.
//! The subtype-specific columns are folded into [`ItemKind`] so that only the
//! columns belonging to the item's type are ever read or written.

use crate::{
    model::item::{CreateItemDto, ItemDetailsDto, ItemDto, UpdateItemDto},
    server::error::{internal::InternalError, order::OrderError, AppError},
};

pub const BOOK_DTYPE: &str = "B";
pub const ALBUM_DTYPE: &str = "A";
pub const MOVIE_DTYPE: &str = "M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
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

impl ItemKind {
    /// Discriminator value stored in the `dtype` column.
    pub fn dtype(&self) -> &'static str {
        match self {
            Self::Book { .. } => BOOK_DTYPE,
            Self::Album { .. } => ALBUM_DTYPE,
            Self::Movie { .. } => MOVIE_DTYPE,
        }
    }

    pub fn from_dto(dto: ItemDetailsDto) -> Self {
        match dto {
            ItemDetailsDto::Book { author, isbn } => Self::Book { author, isbn },
            ItemDetailsDto::Album { artist, etc } => Self::Album { artist, etc },
            ItemDetailsDto::Movie { director, actor } => Self::Movie { director, actor },
        }
    }

    pub fn into_dto(self) -> ItemDetailsDto {
        match self {
            Self::Book { author, isbn } => ItemDetailsDto::Book { author, isbn },
            Self::Album { artist, etc } => ItemDetailsDto::Album { artist, etc },
            Self::Movie { director, actor } => ItemDetailsDto::Movie { director, actor },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub kind: ItemKind,
}

impl Item {
    /// Converts an item row into the domain model, reading only the columns of its subtype.
    ///
    /// # Returns
    /// - `Ok(Item)` - Row carries a known discriminator
    /// - `Err(InternalError::UnknownItemType)` - Discriminator is not `B`, `A` or `M`
    pub fn from_entity(entity: entity::item::Model) -> Result<Self, InternalError> {
        let kind = match entity.dtype.as_str() {
            BOOK_DTYPE => ItemKind::Book {
                author: entity.author,
                isbn: entity.isbn,
            },
            ALBUM_DTYPE => ItemKind::Album {
                artist: entity.artist,
                etc: entity.etc,
            },
            MOVIE_DTYPE => ItemKind::Movie {
                director: entity.director,
                actor: entity.actor,
            },
            _ => {
                return Err(InternalError::UnknownItemType {
                    item_id: entity.id,
                    dtype: entity.dtype,
                })
            }
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            stock_quantity: entity.stock_quantity,
            kind,
        })
    }

    pub fn add_stock(&mut self, quantity: i32) {
        self.stock_quantity += quantity;
    }

    /// Reserves `quantity` units.
    ///
    /// Fails iff `quantity` exceeds the current stock; the stock is untouched on failure.
    pub fn remove_stock(&mut self, quantity: i32) -> Result<(), OrderError> {
        let rest = self.stock_quantity - quantity;
        if rest < 0 {
            return Err(OrderError::NotEnoughStock {
                item_id: self.id,
                requested: quantity,
                available: self.stock_quantity,
            });
        }

        self.stock_quantity = rest;
        Ok(())
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            price: self.price,
            stock_quantity: self.stock_quantity,
            details: self.kind.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
    pub kind: ItemKind,
}

impl CreateItemParams {
    pub fn from_dto(dto: CreateItemDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            stock_quantity: dto.stock_quantity,
            kind: ItemKind::from_dto(dto.details),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_fields(&self.name, self.price, self.stock_quantity)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateItemParams {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock_quantity: i32,
}

impl UpdateItemParams {
    pub fn from_dto(id: i32, dto: UpdateItemDto) -> Self {
        Self {
            id,
            name: dto.name,
            price: dto.price,
            stock_quantity: dto.stock_quantity,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_fields(&self.name, self.price, self.stock_quantity)
    }
}

fn validate_fields(name: &str, price: i32, stock_quantity: i32) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Item name must not be empty".to_string()));
    }
    if price < 0 {
        return Err(AppError::BadRequest("Item price must not be negative".to_string()));
    }
    if stock_quantity < 0 {
        return Err(AppError::BadRequest(
            "Item stock quantity must not be negative".to_string(),
        ));
    }

    Ok(())
}
