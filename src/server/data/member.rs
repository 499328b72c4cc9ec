use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{address::Address, member::CreateMemberParams};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new member and returns the stored row
    pub async fn create(&self, params: CreateMemberParams) -> Result<entity::member::Model, DbErr> {
        let (city, street, zipcode) = Address::into_columns(params.address);

        entity::member::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(city),
            street: ActiveValue::Set(street),
            zipcode: ActiveValue::Set(zipcode),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::member::Model>, DbErr> {
        entity::prelude::Member::find_by_id(id).one(self.db).await
    }

    /// All members ordered by id
    pub async fn find_all(&self) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of members whose name equals `name` exactly
    pub async fn count_by_name(&self, name: &str) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::Name.eq(name))
            .count(self.db)
            .await
    }

    /// Renames a member, returning whether a row was updated
    pub async fn update_name(&self, id: i32, name: String) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(entity::member::Column::Name, Expr::value(name))
            .filter(entity::member::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
