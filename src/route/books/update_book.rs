use axum::extract::State;

use crate::{
    extractor::{json::ApiJson, path::ApiPath},
    model::book::Book,
    server_error,
    state::ApiState,
};

use super::{error::BookError, BookResponse};

/// Replaces the book stored under the ISBN of the path.
///
/// The ISBN of the path overrides the one in the body.
pub async fn update_book(
    ApiPath(isbn): ApiPath<String>,
    State(state): State<ApiState>,
    ApiJson(mut book): ApiJson<Book>,
) -> Result<BookResponse, BookError> {
    book.isbn = isbn;

    let failures = state.book_validator().validate(&book);
    if !failures.is_empty() {
        return Err(BookError::Validation(failures));
    }

    let updated = state
        .book_service()
        .update(&book)
        .await
        .map_err(server_error!(state))?;

    if !updated {
        tracing::warn!(isbn = %book.isbn, "Rejection. Book not found");

        return Err(BookError::NotFound);
    }

    tracing::info!(isbn = %book.isbn, "Book updated");

    Ok(BookResponse(book))
}
