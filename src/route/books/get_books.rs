use axum::extract::State;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{extractor::query::ApiQuery, server_error, state::ApiState};

use super::{error::BookError, BooksResponse};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchBooksQuery {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

pub async fn get_all_books(State(state): State<ApiState>) -> Result<BooksResponse, BookError> {
    let books = state
        .book_service()
        .get_all()
        .await
        .map_err(server_error!(state))?;

    Ok(BooksResponse(books))
}

/// Searches by title. Returns every book when the search term is absent or blank.
pub async fn search_books(
    ApiQuery(query): ApiQuery<SearchBooksQuery>,
    State(state): State<ApiState>,
) -> Result<BooksResponse, BookError> {
    let books = match query.search_term.as_deref() {
        Some(term) if !term.trim().is_empty() => state.book_service().search_by_title(term).await,
        _ => state.book_service().get_all().await,
    }
    .map_err(server_error!(state))?;

    Ok(BooksResponse(books))
}
