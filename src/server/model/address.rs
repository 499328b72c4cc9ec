use crate::model::member::AddressDto;

/// Postal address embedded in members and deliveries.
///
/// Immutable once constructed. The three parts are stored as nullable columns on the
/// owning table; an address is only considered present when all of them are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    city: String,
    street: String,
    zipcode: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
            zipcode: zipcode.into(),
        }
    }

    /// Rebuilds an address from its nullable columns.
    ///
    /// # Returns
    /// - `Some(Address)` - All three columns are set
    /// - `None` - At least one column is null
    pub fn from_columns(
        city: Option<String>,
        street: Option<String>,
        zipcode: Option<String>,
    ) -> Option<Self> {
        match (city, street, zipcode) {
            (Some(city), Some(street), Some(zipcode)) => Some(Self::new(city, street, zipcode)),
            _ => None,
        }
    }

    /// Splits the address back into nullable column values.
    pub fn into_columns(address: Option<Self>) -> (Option<String>, Option<String>, Option<String>) {
        match address {
            Some(a) => (Some(a.city), Some(a.street), Some(a.zipcode)),
            None => (None, None, None),
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            city: self.city,
            street: self.street,
            zipcode: self.zipcode,
        }
    }
}
