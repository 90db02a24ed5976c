use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::book::Book;

pub mod app;
pub mod create_book;
pub mod delete_book;
pub mod error;
pub mod get_book;
pub mod get_books;
pub mod update_book;


pub const BASE_ROUTE: &str = "/books";

/// A single book with [`StatusCode::OK`].
#[derive(Debug)]
pub struct BookResponse(pub Book);

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// A list of books with [`StatusCode::OK`]. May be empty.
#[derive(Debug)]
pub struct BooksResponse(pub Vec<Book>);

impl IntoResponse for BooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
