use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{headers::Host, TypedHeader};

use crate::{extractor::json::ApiJson, model::book::Book, server_error, state::ApiState};

use super::{error::BookError, BASE_ROUTE};

#[derive(Debug)]
pub struct CreateBookResponse {
    pub location: String,
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(LOCATION, self.location)],
            Json(self.book),
        )
            .into_response()
    }
}

/// Canonical URI of a book, used as the `Location` of a created book.
///
/// Absolute when a public base URL is configured or the request names its host, relative otherwise.
pub fn book_location(public_base_url: Option<&str>, host: Option<&Host>, isbn: &str) -> String {
    let path = format!("{BASE_ROUTE}/{isbn}");

    match (public_base_url, host) {
        (Some(base_url), _) => format!("{}{path}", base_url.trim_end_matches('/')),
        (None, Some(host)) => match host.port() {
            Some(port) => format!("http://{}:{port}{path}", host.hostname()),
            None => format!("http://{}{path}", host.hostname()),
        },
        (None, None) => path,
    }
}

pub async fn create_book(
    State(state): State<ApiState>,
    host: Option<TypedHeader<Host>>,
    ApiJson(book): ApiJson<Book>,
) -> Result<CreateBookResponse, BookError> {
    let failures = state.book_validator().validate(&book);
    if !failures.is_empty() {
        return Err(BookError::Validation(failures));
    }

    let created = state
        .book_service()
        .create(&book)
        .await
        .map_err(server_error!(state))?;

    if !created {
        tracing::warn!(isbn = %book.isbn, "Rejection. Book already exists");

        return Err(BookError::isbn_conflict());
    }

    let location = book_location(
        state.public_base_url(),
        host.as_ref().map(|TypedHeader(host)| host),
        &book.isbn,
    );

    tracing::info!(isbn = %book.isbn, %location, "Book created");

    Ok(CreateBookResponse { location, book })
}

#[cfg(test)]
mod tests {
    use axum::http::uri::Authority;

    use super::*;

    fn host(authority: &'static str) -> Host {
        Host::from(Authority::from_static(authority))
    }

    #[test]
    fn location_is_relative_without_host() {
        assert_eq!(
            book_location(None, None, "9781234567897"),
            "/books/9781234567897"
        );
    }

    #[test]
    fn location_uses_request_host() {
        assert_eq!(
            book_location(None, Some(&host("localhost:5000")), "9781234567897"),
            "http://localhost:5000/books/9781234567897"
        );
        assert_eq!(
            book_location(None, Some(&host("library.example.com")), "9781234567897"),
            "http://library.example.com/books/9781234567897"
        );
    }

    #[test]
    fn location_prefers_public_base_url() {
        assert_eq!(
            book_location(
                Some("https://library.example.com/"),
                Some(&host("localhost:5000")),
                "9781234567897"
            ),
            "https://library.example.com/books/9781234567897"
        );
    }
}
