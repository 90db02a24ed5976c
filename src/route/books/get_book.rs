use axum::extract::State;

use crate::{extractor::path::ApiPath, server_error, state::ApiState};

use super::{error::BookError, BookResponse};

pub async fn get_book(
    ApiPath(isbn): ApiPath<String>,
    State(state): State<ApiState>,
) -> Result<BookResponse, BookError> {
    state
        .book_service()
        .get_by_isbn(&isbn)
        .await
        .map_err(server_error!(state))?
        .map(BookResponse)
        .ok_or(BookError::NotFound)
}
