use std::{borrow::Cow, sync::OnceLock};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

pub const INVALID_ISBN_MESSAGE: &str = "Value was not valid ISBN-13";

/// A book of the library, identified by its ISBN-13.
///
/// Missing text fields deserialize as empty so that they are reported by validation
/// instead of failing the whole body. Field names are accepted in camelCase and PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Book {
    #[serde(default, alias = "Isbn")]
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,
    #[serde(default, alias = "Title")]
    #[validate(length(min = 1, message = "'Title' must not be empty."))]
    pub title: String,
    #[serde(default, alias = "Author")]
    #[validate(length(min = 1, message = "'Author' must not be empty."))]
    pub author: String,
    #[serde(default, alias = "ShortDescription")]
    #[validate(required(message = "'Short Description' must not be empty."))]
    pub short_description: Option<String>,
    #[serde(default, alias = "PageCount")]
    #[validate(range(
        min = 0,
        max = 100_000,
        message = "'Page Count' must be between 0 and 100000."
    ))]
    pub page_count: i32,
    #[serde(alias = "ReleaseDate", deserialize_with = "deserialize_release_date")]
    #[schemars(with = "NaiveDate")]
    pub release_date: NaiveDate,
}

fn isbn_regex() -> &'static Regex {
    static ISBN: OnceLock<Regex> = OnceLock::new();

    ISBN.get_or_init(|| Regex::new(r"^[0-9]{3}[0-9]{10}$").expect("ISBN-13 regex is valid"))
}

/// Checks the ISBN-13 pattern: 13 digits with no separators, no checksum.
pub fn is_valid_isbn(isbn: &str) -> bool {
    isbn_regex().is_match(isbn)
}

fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    if is_valid_isbn(isbn) {
        return Ok(());
    }

    let mut err = ValidationError::new("isbn13");
    err.message = Some(Cow::Borrowed(INVALID_ISBN_MESSAGE));

    Err(err)
}

/// Parses `2023-01-01`, `2023-01-01T00:00:00` or an RFC 3339 date-time, keeping the date only.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|date_time| date_time.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_release_date(&value)
        .ok_or_else(|| de::Error::custom(format!("`{value}` is not a valid date")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn_pattern() {
        assert!(is_valid_isbn("9781234567897"));
        assert!(!is_valid_isbn("978-1234567897"));
        assert!(!is_valid_isbn("INVALID_ISBN"));
        assert!(!is_valid_isbn("978123456789"));
        assert!(!is_valid_isbn("97812345678970"));
        assert!(!is_valid_isbn(""));
    }

    #[test]
    fn release_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 1);

        assert_eq!(parse_release_date("2023-01-01"), expected);
        assert_eq!(parse_release_date("2023-01-01T00:00:00"), expected);
        assert_eq!(parse_release_date("2023-01-01T10:30:00.123"), expected);
        assert_eq!(parse_release_date("2023-01-01T00:00:00+00:00"), expected);
        assert_eq!(parse_release_date("2023-02-30"), None);
        assert_eq!(parse_release_date("yesterday"), None);
    }

    #[test]
    fn deserializes_pascal_case_body() {
        let book: Book = serde_json::from_str(
            r#"{"Isbn":"9781234567897","Title":"Go","Author":"A","ShortDescription":"d","PageCount":10,"ReleaseDate":"2023-01-01"}"#,
        )
        .expect("Body is not parsable");

        assert_eq!(book.isbn, "9781234567897");
        assert_eq!(book.short_description.as_deref(), Some("d"));
        assert_eq!(book.page_count, 10);
    }

    #[test]
    fn serializes_camel_case_and_plain_date() {
        let book = Book {
            isbn: String::from("9781234567897"),
            title: String::from("Go"),
            author: String::from("A"),
            short_description: Some(String::from("d")),
            page_count: 10,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("Valid date"),
        };

        let json = serde_json::to_value(&book).expect("Book is serializable");

        assert_eq!(json["shortDescription"], "d");
        assert_eq!(json["pageCount"], 10);
        assert_eq!(json["releaseDate"], "2023-01-01");
    }

    #[test]
    fn missing_text_fields_default_to_empty() {
        let book: Book = serde_json::from_str(r#"{"releaseDate":"2023-01-01"}"#)
            .expect("Body is not parsable");

        assert!(book.isbn.is_empty());
        assert!(book.title.is_empty());
        assert!(book.short_description.is_none());
    }
}
