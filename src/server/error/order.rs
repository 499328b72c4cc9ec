use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Order business rule violations.
///
/// These are expected failures caused by the request rather than by the server,
/// so they are reported to the client verbatim.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    /// An order attempted to reserve more units than the item has in stock.
    ///
    /// Results in a 422 Unprocessable Entity response. The item's stock is left
    /// unchanged.
    #[error("Not enough stock for item {item_id}: requested {requested}, available {available}")]
    NotEnoughStock {
        /// Item being reserved
        item_id: i32,
        /// Quantity the order asked for
        requested: i32,
        /// Stock at evaluation time
        available: i32,
    },

    /// The order's delivery is already complete.
    #[error("Order {0} has already been delivered and cannot be cancelled")]
    AlreadyDelivered(i32),

    /// The order has already been cancelled.
    #[error("Order {0} is already cancelled")]
    AlreadyCancelled(i32),
}

/// Converts order errors into HTTP responses.
///
/// # Returns
/// - 422 Unprocessable Entity - For every variant, with the error message as body
impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
