//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica entità.
//! Tutti gli errori vengono tradotti in `AppError` prima di lasciare l'handler.

pub mod author;
pub mod book;

// Re-exports per facilitare l'import
pub use author::{delete_author, get_author, list_authors, register_author, update_author};
pub use book::{create_book, delete_book, get_book, list_books, update_book};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
