//! Book endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::Book,
    AppState,
};

/// Location of a book as advertised to clients after a write
pub fn book_location(id: &str) -> String {
    format!("/api/books/{}", id)
}

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books; `null` when the store is empty", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Option<Vec<Book>>> {
    let books = state.services.catalog.list_books();
    if books.is_empty() && state.config.api.empty_list_as_null {
        Json(None)
    } else {
        Json(Some(books))
    }
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", headers(("Location" = String, description = "URL of the new book"))),
        (status = 400, description = "Validation failed", body = String),
        (status = 409, description = "Book with given id already exists", body = String),
        (status = 500, description = "Request body is not a book")
    )
)]
pub async fn create_book(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let book = parse_book(&state, &body)?;
    let id = state.services.catalog.create_book(book)?;
    Ok(written(StatusCode::CREATED, &id))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book identifier (case-folded to lower case)")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book with given id not present", body = String)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id.to_lowercase())?;
    Ok(Json(book))
}

/// Replace a book; the body's id becomes the book's new key
#[utoipa::path(
    put,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book identifier (case-folded to lower case)")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", headers(("Location" = String, description = "URL of the book after the update"))),
        (status = 400, description = "Validation failed", body = String),
        (status = 404, description = "Book with given id not present", body = String),
        (status = 500, description = "Request body is not a book")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    let book = parse_book(&state, &body)?;
    let new_id = state
        .services
        .catalog
        .update_book(&id.to_lowercase(), book)?;
    Ok(written(StatusCode::OK, &new_id))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book identifier (case-folded to lower case)")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book with given id not present", body = String)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(&id.to_lowercase())?;
    Ok(StatusCode::OK)
}

/// Fallback for methods the book routes do not serve
pub async fn unsupported_method() -> AppError {
    AppError::UnsupportedMethod
}

/// A `null` body decodes to an empty book and fails validation instead.
fn parse_book(state: &AppState, body: &[u8]) -> AppResult<Book> {
    serde_json::from_slice::<Option<Book>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            let status = StatusCode::from_u16(state.config.api.malformed_body_status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            AppError::MalformedBody(status, e.to_string())
        })
}

/// Empty-bodied response pointing at the written book
fn written(status: StatusCode, id: &str) -> Response {
    let mut response = status.into_response();
    match HeaderValue::try_from(book_location(id)) {
        Ok(location) => {
            response.headers_mut().insert(header::LOCATION, location);
        }
        Err(_) => tracing::warn!("Book id {:?} cannot be used in a Location header", id),
    }
    response
}
