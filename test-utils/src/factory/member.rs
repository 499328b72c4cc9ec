//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .name("userA")
///     .no_address()
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: Option<String>,
    street: Option<String>,
    zipcode: Option<String>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {id}"` where id is auto-incremented
    /// - address: `"Seoul"`, `"Street {id}"`, `"{id}"` zero padded to five digits
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Member {}", id),
            city: Some("Seoul".to_string()),
            street: Some(format!("Street {}", id)),
            zipcode: Some(format!("{:05}", id % 100_000)),
        }
    }

    /// Sets the member name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets every address field.
    pub fn address(
        mut self,
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        self.city = Some(city.into());
        self.street = Some(street.into());
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Clears the address, matching members created without one.
    pub fn no_address(mut self) -> Self {
        self.city = None;
        self.street = None;
        self.zipcode = None;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            street: ActiveValue::Set(self.street),
            zipcode: ActiveValue::Set(self.zipcode),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
