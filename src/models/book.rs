//! Book model and its write-time rules.
//!
//! A book is accepted when all four fields are non-empty and the publication
//! date follows the `YYYY-MM-DD` layout. Violations are reported as one
//! human-readable string, messages concatenated in a fixed order with no
//! separator, so clients always see the same text for the same input.

use std::fmt;

use chrono::NaiveDate;
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Layout accepted for `publication-date`
pub const DATE_LAYOUT: &str = "%Y-%m-%d";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format";

// Error codes double as the reporting order.
const TITLE_REQUIRED: &str = "title_required";
const AUTHOR_REQUIRED: &str = "author_required";
const PUBLICATION_DATE_REQUIRED: &str = "publication_date_required";
const ID_REQUIRED: &str = "id_required";
const RULE_ORDER: [&str; 4] = [
    TITLE_REQUIRED,
    AUTHOR_REQUIRED,
    PUBLICATION_DATE_REQUIRED,
    ID_REQUIRED,
];

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Validate, ToSchema)]
pub struct Book {
    #[validate(length(min = 1, code = "title_required", message = "Title is a required field"))]
    #[schema(example = "title1")]
    pub title: String,
    #[validate(length(min = 1, code = "author_required", message = "Author is a required field"))]
    #[schema(example = "author1")]
    pub author: String,
    /// Publication date, `YYYY-MM-DD`
    #[serde(rename = "publication-date")]
    #[validate(length(
        min = 1,
        code = "publication_date_required",
        message = "Publication-date is a required field"
    ))]
    #[schema(example = "1991-10-04")]
    pub publication_date: String,
    /// Client-supplied identifier, unique within the store
    #[validate(length(min = 1, code = "id_required", message = "Id is a required field"))]
    #[schema(example = "id-123")]
    pub id: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_date: publication_date.into(),
            id: id.into(),
        }
    }

    /// Every rule violation as one message; empty when the book is valid.
    ///
    /// The date layout is checked even when the date is empty, so an empty
    /// date reports both the required-field and the format message.
    pub fn violations(&self) -> String {
        let mut errors: Vec<ValidationError> = match Validate::validate(self) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .into_values()
                .flat_map(|errs| errs.iter().cloned())
                .collect(),
        };
        errors.sort_by_key(|e| rule_rank(&e.code));

        let mut message: String = errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();

        if !is_valid_publication_date(&self.publication_date) {
            message.push_str(INVALID_DATE_FORMAT);
        }
        message
    }
}

/// Decoding is lenient the way clients of the book API expect:
/// keys match regardless of case, absent or `null` fields stay empty, and
/// unknown keys are skipped. A later key overwrites an earlier one.
impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BookVisitor)
    }
}

struct BookVisitor;

impl<'de> Visitor<'de> for BookVisitor {
    type Value = Book;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a book object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Book, A::Error> {
        let mut book = Book::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.to_lowercase().as_str() {
                "title" => &mut book.title,
                "author" => &mut book.author,
                "publication-date" => &mut book.publication_date,
                "id" => &mut book.id,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }
        Ok(book)
    }
}

fn rule_rank(code: &str) -> usize {
    RULE_ORDER
        .iter()
        .position(|c| *c == code)
        .unwrap_or(RULE_ORDER.len())
}

/// Strict `YYYY-MM-DD`: zero-padded fields and a real calendar date.
pub fn is_valid_publication_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shaped && NaiveDate::parse_from_str(value, DATE_LAYOUT).is_ok()
}
