use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{extractor::path::ApiPath, server_error, state::ApiState};

use super::error::BookError;

#[derive(Debug)]
pub struct DeleteBookResponse;

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

pub async fn delete_book(
    ApiPath(isbn): ApiPath<String>,
    State(state): State<ApiState>,
) -> Result<DeleteBookResponse, BookError> {
    let deleted = state
        .book_service()
        .delete(&isbn)
        .await
        .map_err(server_error!(state))?;

    if !deleted {
        tracing::warn!(%isbn, "Rejection. Book not found");

        return Err(BookError::NotFound);
    }

    tracing::info!(%isbn, "Book deleted");

    Ok(DeleteBookResponse)
}
