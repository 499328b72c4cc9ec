use crate::server::{error::internal::InternalError, model::address::Address};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Ready,
    Comp,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Comp => "COMP",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "READY" => Ok(Self::Ready),
            "COMP" => Ok(Self::Comp),
            other => Err(InternalError::UnknownDeliveryStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub id: i32,
    pub address: Option<Address>,
    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn from_entity(entity: entity::delivery::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            address: Address::from_columns(entity.city, entity.street, entity.zipcode),
            status: DeliveryStatus::parse(&entity.status)?,
        })
    }
}

/// Parameters for creating the delivery of a new order.
#[derive(Debug, Clone)]
pub struct CreateDeliveryParams {
    pub address: Option<Address>,
    pub status: DeliveryStatus,
}
