use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MemberError {
    /// A member with the requested name already exists.
    ///
    /// Results in a 409 Conflict response.
    #[error("Member '{0}' already exists")]
    DuplicateName(String),
}

impl IntoResponse for MemberError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateName(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
