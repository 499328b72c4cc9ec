//! Member domain model and parameters.

use crate::{
    model::member::{CreateMemberDto, MemberDto, MemberSummaryDto, UpdateMemberDto},
    server::{error::AppError, model::address::Address},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub address: Option<Address>,
}

impl Member {
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: Address::from_columns(entity.city, entity.street, entity.zipcode),
        }
    }

    pub fn into_summary_dto(self) -> MemberSummaryDto {
        MemberSummaryDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn into_dto(self) -> MemberDto {
        MemberDto { name: self.name }
    }
}

/// Parameters for joining a new member.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub name: String,
    pub address: Option<Address>,
}

impl CreateMemberParams {
    /// Request-DTO creation; the member starts without an address.
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            name: dto.name,
            address: None,
        }
    }

    /// Creation from a raw member entity posted by the client.
    ///
    /// Any id in the body is ignored. The address columns must be given all together
    /// or not at all.
    ///
    /// # Returns
    /// - `Ok(CreateMemberParams)` - Address complete or absent
    /// - `Err(AppError::BadRequest)` - Only some address columns are set
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        let given = [&entity.city, &entity.street, &entity.zipcode]
            .iter()
            .filter(|column| column.is_some())
            .count();
        if given != 0 && given != 3 {
            return Err(AppError::BadRequest(
                "Address must include city, street and zipcode, or be omitted".to_string(),
            ));
        }

        Ok(Self {
            name: entity.name,
            address: Address::from_columns(entity.city, entity.street, entity.zipcode),
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub id: i32,
    pub name: String,
}

impl UpdateMemberParams {
    pub fn from_dto(id: i32, dto: UpdateMemberDto) -> Self {
        Self { id, name: dto.name }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Member name must not be empty".to_string()));
    }

    Ok(())
}
