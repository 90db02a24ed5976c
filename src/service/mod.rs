use axum::async_trait;

use crate::model::book::Book;

pub mod sqlite;

#[derive(Debug, thiserror::Error)]
pub enum BookServiceError {
    #[error("Database failure: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD and search over the stored books.
///
/// Absent books and ISBN conflicts are results, not errors.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Returns every book, ordered by ISBN.
    async fn get_all(&self) -> Result<Vec<Book>, BookServiceError>;

    async fn get_by_isbn(&self, isbn: &str) -> Result<Option<Book>, BookServiceError>;

    /// Case-insensitive substring match on the title, ordered by ISBN.
    async fn search_by_title(&self, term: &str) -> Result<Vec<Book>, BookServiceError>;

    /// Returns `false` if a book with the same ISBN already exists.
    async fn create(&self, book: &Book) -> Result<bool, BookServiceError>;

    /// Returns `false` if no book with the ISBN of `book` exists.
    async fn update(&self, book: &Book) -> Result<bool, BookServiceError>;

    /// Returns `false` if no book with the ISBN exists.
    async fn delete(&self, isbn: &str) -> Result<bool, BookServiceError>;
}
