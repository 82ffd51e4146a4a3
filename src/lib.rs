//! Server library - espone i moduli principali per i test

pub mod core;
pub mod db;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Crea il router principale dell'applicazione
///
/// # Arguments
/// * `state` - Stato condiviso con i repository
/// * `request_timeout` - Oltre questo tempo la richiesta riceve REQUEST_TIMEOUT e il
///   handler viene abbandonato, compresa l'eventuale attesa di una connessione dal pool
pub fn create_router(state: Arc<AppState>, request_timeout: Duration) -> Router {
    use crate::core::request_logger;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(configure_book_routes())
        .merge(configure_author_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        // ultimo layer = il più esterno: logga anche le risposte 408 del timeout
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

/// Configura le routes per la gestione dei libri
fn configure_book_routes() -> Router<Arc<AppState>> {
    use services::*;

    // "/all" è una route statica e ha la precedenza su "/{book_id}"
    Router::new()
        .route("/api/book", post(create_book))
        .route("/api/book/", post(create_book))
        .route("/api/book/all", get(list_books))
        .route(
            "/api/book/{book_id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// Configura le routes per la gestione degli autori
fn configure_author_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/api/author", post(register_author))
        .route("/api/author/", post(register_author))
        .route("/api/author/all", get(list_authors))
        .route(
            "/api/author/{author_id}",
            get(get_author).put(update_author).delete(delete_author),
        )
}
