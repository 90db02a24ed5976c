use axum::async_trait;
use sqlx::SqlitePool;

use crate::model::book::Book;

use super::{BookService, BookServiceError};

const SELECT_BOOKS: &str =
    "SELECT Isbn, Title, Author, ShortDescription, PageCount, ReleaseDate FROM Books";

/// [`BookService`] on the SQLite `Books` table.
///
/// Every operation acquires its own connection from the pool, released when the operation ends.
#[derive(Clone)]
pub struct SqliteBookService {
    pool: SqlitePool,
}

impl SqliteBookService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookService for SqliteBookService {
    #[tracing::instrument(skip_all)]
    async fn get_all(&self) -> Result<Vec<Book>, BookServiceError> {
        let mut connection = self.pool.acquire().await?;

        let books = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOKS} ORDER BY Isbn"))
            .fetch_all(&mut *connection)
            .await?;

        tracing::debug!(count = books.len(), "Fetched books");

        Ok(books)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_isbn(&self, isbn: &str) -> Result<Option<Book>, BookServiceError> {
        let mut connection = self.pool.acquire().await?;

        let book = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOKS} WHERE Isbn = ? LIMIT 1"))
            .bind(isbn)
            .fetch_optional(&mut *connection)
            .await?;

        Ok(book)
    }

    #[tracing::instrument(skip(self))]
    async fn search_by_title(&self, term: &str) -> Result<Vec<Book>, BookServiceError> {
        let mut connection = self.pool.acquire().await?;

        let books =
            sqlx::query_as::<_, Book>(&format!("{SELECT_BOOKS} WHERE Title LIKE ? ORDER BY Isbn"))
                .bind(format!("%{term}%"))
                .fetch_all(&mut *connection)
                .await?;

        tracing::debug!(count = books.len(), "Matched books");

        Ok(books)
    }

    #[tracing::instrument(skip_all, fields(isbn = %book.isbn))]
    async fn create(&self, book: &Book) -> Result<bool, BookServiceError> {
        let mut connection = self.pool.acquire().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM Books WHERE Isbn = ?")
            .bind(&book.isbn)
            .fetch_one(&mut *connection)
            .await?;

        if existing > 0 {
            tracing::debug!("Book already exists");

            return Ok(false);
        }

        // Another writer may insert the same ISBN after the check. The primary key decides.
        let inserted = sqlx::query(
            "INSERT INTO Books (Isbn, Title, Author, ShortDescription, PageCount, ReleaseDate) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.short_description.as_deref().unwrap_or_default())
        .bind(book.page_count)
        .bind(book.release_date)
        .execute(&mut *connection)
        .await;

        match inserted {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                tracing::debug!("Book was inserted concurrently");

                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip_all, fields(isbn = %book.isbn))]
    async fn update(&self, book: &Book) -> Result<bool, BookServiceError> {
        let mut connection = self.pool.acquire().await?;

        let result = sqlx::query(
            "UPDATE Books SET Title = ?, Author = ?, ShortDescription = ?, PageCount = ?, ReleaseDate = ? \
             WHERE Isbn = ?",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.short_description.as_deref().unwrap_or_default())
        .bind(book.page_count)
        .bind(book.release_date)
        .bind(&book.isbn)
        .execute(&mut *connection)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, isbn: &str) -> Result<bool, BookServiceError> {
        let mut connection = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM Books WHERE Isbn = ?")
            .bind(isbn)
            .execute(&mut *connection)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        config::DatabaseConfig,
        data::{connection::connect, initializer::DatabaseInitializer},
    };

    async fn service() -> SqliteBookService {
        service_with(DatabaseConfig::new("sqlite::memory:", 1)).await
    }

    async fn service_with(config: DatabaseConfig) -> SqliteBookService {
        let pool = connect(&config).await.expect("Failed to connect");

        DatabaseInitializer::new(pool.clone())
            .initialize()
            .await
            .expect("Failed to initialize database");

        SqliteBookService::new(pool)
    }

    fn book(isbn: &str, title: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: String::from("Author"),
            short_description: Some(String::from("Description")),
            page_count: 100,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("Valid date"),
        }
    }

    #[tokio::test]
    async fn create_then_get_by_isbn() {
        let service = service().await;
        let book = book("9781234567897", "The Rust Programming Language");

        assert!(service.create(&book).await.expect("Create failed"));

        let stored = service
            .get_by_isbn(&book.isbn)
            .await
            .expect("Get failed")
            .expect("Book not found");

        assert_eq!(stored, book);
    }

    #[tokio::test]
    async fn create_duplicate_returns_false() {
        let service = service().await;
        let book = book("9781234567897", "Original");

        assert!(service.create(&book).await.expect("Create failed"));

        let duplicate = Book {
            title: String::from("Duplicate"),
            ..book.clone()
        };

        assert!(!service.create(&duplicate).await.expect("Create failed"));

        let stored = service
            .get_by_isbn(&book.isbn)
            .await
            .expect("Get failed")
            .expect("Book not found");

        assert_eq!(stored.title, "Original");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_insert_exactly_once() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("library.db");

        let service =
            service_with(DatabaseConfig::new(format!("sqlite://{}", path.display()), 8)).await;

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let service = service.clone();
                let book = book("9781234567897", &format!("Writer {i}"));

                tokio::spawn(async move { service.create(&book).await })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;

        for handle in handles {
            match handle.await.expect("Task panicked") {
                Ok(true) => created += 1,
                Ok(false) => conflicts += 1,
                Err(err) => panic!("Create failed: {err}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(service.get_all().await.expect("Get all failed").len(), 1);
    }

    #[tokio::test]
    async fn get_by_unknown_isbn_is_none() {
        let service = service().await;

        assert!(service
            .get_by_isbn("9780000000000")
            .await
            .expect("Get failed")
            .is_none());
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_isbn() {
        let service = service().await;

        for isbn in ["9783333333333", "9781111111111", "9782222222222"] {
            service.create(&book(isbn, "Title")).await.expect("Create failed");
        }

        let isbns: Vec<String> = service
            .get_all()
            .await
            .expect("Get all failed")
            .into_iter()
            .map(|book| book.isbn)
            .collect();

        assert_eq!(isbns, vec!["9781111111111", "9782222222222", "9783333333333"]);
    }

    #[tokio::test]
    async fn search_by_title_is_case_insensitive_substring() {
        let service = service().await;

        let rust = book("9781111111111", "Programming Rust");
        let go = book("9782222222222", "The Go Programming Language");
        let cooking = book("9783333333333", "Cooking");

        for book in [&rust, &go, &cooking] {
            service.create(book).await.expect("Create failed");
        }

        let found = service
            .search_by_title("programming")
            .await
            .expect("Search failed");

        assert_eq!(found, vec![rust, go]);

        let found = service.search_by_title("zzz").await.expect("Search failed");

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn update_existing_and_missing() {
        let service = service().await;
        let book = book("9781234567897", "Before");

        assert!(!service.update(&book).await.expect("Update failed"));

        service.create(&book).await.expect("Create failed");

        let updated = Book {
            title: String::from("After"),
            page_count: 69,
            ..book.clone()
        };

        assert!(service.update(&updated).await.expect("Update failed"));

        let stored = service
            .get_by_isbn(&book.isbn)
            .await
            .expect("Get failed")
            .expect("Book not found");

        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn delete_existing_and_missing() {
        let service = service().await;
        let book = book("9781234567897", "Title");

        assert!(!service.delete(&book.isbn).await.expect("Delete failed"));

        service.create(&book).await.expect("Create failed");

        assert!(service.delete(&book.isbn).await.expect("Delete failed"));
        assert!(service
            .get_by_isbn(&book.isbn)
            .await
            .expect("Get failed")
            .is_none());
    }
}
