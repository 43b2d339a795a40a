//! Error types for the bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const BOOK_EXISTS: &str = "Book with given id already exists";
pub const BOOK_NOT_PRESENT: &str = "Book with given id not present";
pub const UNSUPPORTED_METHOD: &str = "Unsupported request method";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Concatenated validator messages
    #[error("{0}")]
    Validation(String),

    #[error("{}", BOOK_EXISTS)]
    Conflict,

    #[error("{}", BOOK_NOT_PRESENT)]
    NotFound,

    #[error("{}", UNSUPPORTED_METHOD)]
    UnsupportedMethod,

    /// Request body could not be decoded as a book
    #[error("Malformed request body: {1}")]
    MalformedBody(StatusCode, String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::UnsupportedMethod => StatusCode::BAD_REQUEST,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MalformedBody(status, _) => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::MalformedBody(_, detail) => {
                tracing::warn!("Malformed request body: {}", detail);
                status.into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
