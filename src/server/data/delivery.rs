use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::{address::Address, delivery::CreateDeliveryParams};

pub struct DeliveryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeliveryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateDeliveryParams,
    ) -> Result<entity::delivery::Model, DbErr> {
        let (city, street, zipcode) = Address::into_columns(params.address);

        entity::delivery::ActiveModel {
            city: ActiveValue::Set(city),
            street: ActiveValue::Set(street),
            zipcode: ActiveValue::Set(zipcode),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
