use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::ApiError, validation::ValidationFailure};

pub const ISBN_CONFLICT_MESSAGE: &str = "A book with this ISBN-13 already exists";

/// Errors of the book endpoints.
#[derive(Debug)]
pub enum BookError {
    /// The payload was rejected. Responds with the failures and [`StatusCode::BAD_REQUEST`].
    Validation(Vec<ValidationFailure>),
    /// No book with the requested ISBN. Responds with an empty [`StatusCode::NOT_FOUND`].
    NotFound,
    Api(ApiError),
}

impl BookError {
    pub fn isbn_conflict() -> Self {
        BookError::Validation(vec![ValidationFailure::new("Isbn", ISBN_CONFLICT_MESSAGE)])
    }
}

impl From<ApiError> for BookError {
    fn from(err: ApiError) -> Self {
        BookError::Api(err)
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        match self {
            BookError::Validation(failures) => {
                (StatusCode::BAD_REQUEST, Json(failures)).into_response()
            }
            BookError::NotFound => StatusCode::NOT_FOUND.into_response(),
            BookError::Api(err) => err.into_response(),
        }
    }
}
