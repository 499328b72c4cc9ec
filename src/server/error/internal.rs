use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Item row carries a discriminator other than `B`, `A` or `M`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown item type '{dtype}' for item {item_id}")]
    UnknownItemType {
        /// Id of the corrupt item row
        item_id: i32,
        /// The discriminator found in the row
        dtype: String,
    },

    /// Order status column holds something other than `ORDER` or `CANCEL`.
    #[error("Unknown order status '{0}'")]
    UnknownOrderStatus(String),

    /// Delivery status column holds something other than `READY` or `COMP`.
    #[error("Unknown delivery status '{0}'")]
    UnknownDeliveryStatus(String),
}
