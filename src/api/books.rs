//! Book (catalog) endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Book, AppState};

use super::BookId;

/// List every book in the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, in catalog order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books())
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Book ID is not an integer", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = String, example = json!("Not Found!"))
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id)?;
    Ok(Json(book))
}
