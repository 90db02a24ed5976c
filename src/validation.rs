use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{model::book::Book, utils::pascal_case};

/// Why a payload was rejected, reported per property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    pub property_name: String,
    pub error_message: String,
}

impl ValidationFailure {
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }

    /// Flattens [`ValidationErrors`] into failures ordered by property name.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut failures: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let property_name = pascal_case(&field);

                errors.iter().map(move |error| {
                    let error_message = error
                        .message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("'{property_name}' is not valid."));

                    ValidationFailure::new(property_name.clone(), error_message)
                })
            })
            .collect();

        failures.sort_by(|a, b| a.property_name.cmp(&b.property_name));

        failures
    }
}

pub trait BookValidator: Send + Sync {
    /// Returns every rule the book violates. Empty when the book is valid.
    fn validate(&self, book: &Book) -> Vec<ValidationFailure>;
}

/// Validates books with the rules declared on [`Book`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBookValidator;

impl BookValidator for DefaultBookValidator {
    fn validate(&self, book: &Book) -> Vec<ValidationFailure> {
        match Validate::validate(book) {
            Ok(()) => Vec::new(),
            Err(errors) => {
                tracing::warn!(?errors, "Validation errors");

                ValidationFailure::from_validation_errors(&errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::book::INVALID_ISBN_MESSAGE;

    fn book() -> Book {
        Book {
            isbn: String::from("9781234567897"),
            title: String::from("Go"),
            author: String::from("A"),
            short_description: Some(String::from("d")),
            page_count: 10,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 1).expect("Valid date"),
        }
    }

    fn property_names(failures: &[ValidationFailure]) -> Vec<&str> {
        failures
            .iter()
            .map(|failure| failure.property_name.as_str())
            .collect()
    }

    #[test]
    fn valid_book_has_no_failures() {
        assert!(DefaultBookValidator.validate(&book()).is_empty());
    }

    #[test]
    fn empty_short_description_is_allowed() {
        let book = Book {
            short_description: Some(String::new()),
            ..book()
        };

        assert!(DefaultBookValidator.validate(&book).is_empty());
    }

    #[test]
    fn invalid_isbn() {
        let book = Book {
            isbn: String::from("INVALID_ISBN"),
            ..book()
        };

        let failures = DefaultBookValidator.validate(&book);

        assert_eq!(
            failures,
            vec![ValidationFailure::new("Isbn", INVALID_ISBN_MESSAGE)]
        );
    }

    #[test]
    fn empty_title() {
        let book = Book {
            title: String::new(),
            ..book()
        };

        let failures = DefaultBookValidator.validate(&book);

        assert_eq!(property_names(&failures), vec!["Title"]);
        assert_eq!(failures[0].error_message, "'Title' must not be empty.");
    }

    #[test]
    fn page_count_bounds() {
        for page_count in [-1, 100_001] {
            let book = Book {
                page_count,
                ..book()
            };

            assert_eq!(
                property_names(&DefaultBookValidator.validate(&book)),
                vec!["PageCount"]
            );
        }

        for page_count in [0, 100_000] {
            let book = Book {
                page_count,
                ..book()
            };

            assert!(DefaultBookValidator.validate(&book).is_empty());
        }
    }

    #[test]
    fn multiple_failures_are_reported_together_in_order() {
        let book = Book {
            isbn: String::from("123"),
            title: String::new(),
            author: String::new(),
            short_description: None,
            ..book()
        };

        let failures = DefaultBookValidator.validate(&book);

        assert_eq!(
            property_names(&failures),
            vec!["Author", "Isbn", "ShortDescription", "Title"]
        );
    }
}
