//! Book services - Gestione libri

use crate::core::{AppError, AppState, ValidatedJson};
use crate::dtos::{BookListResponse, CreateBookDTO, MessageResponse, UpdateBookDTO};
use crate::entities::Book;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state), fields(book_id = %book_id))]
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>, // parametro dalla URL /api/book/{book_id}
) -> Result<Json<Book>, AppError> {
    debug!("Fetching book by ID");
    // 1. Estrarre book_id dal path della URL (id opaco, nessuna validazione)
    // 2. Cercare il libro nel database
    // 3. Se non esiste ritornare NOT_FOUND, altrimenti il libro come JSON
    let book = state.book.read(&book_id).await?.ok_or_else(|| {
        warn!("Book not found");
        AppError::not_found("Book not found")
    })?;

    info!("Book found");
    Ok(Json(book))
}

#[instrument(skip(state))]
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BookListResponse>, AppError> {
    debug!("Listing all books");
    let books = state.book.read_all().await?;
    info!("Retrieved {} books", books.len());
    Ok(Json(BookListResponse::from(books)))
}

#[instrument(skip(state, body), fields(author_id = %body.author_id))]
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateBookDTO>, // JSON body già validato
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    debug!("Creating new book");
    // 1. Il body è già stato deserializzato e validato (nome, pagine > 0, data, autore)
    // 2. Inserire il libro, l'id viene generato dal database
    // 3. Un autore inesistente fa fallire l'INSERT (foreign key) -> INTERNAL_SERVER_ERROR
    // 4. Ritornare CREATED con messaggio e id
    let book_id = state.book.create(&body).await?;

    info!("Book created successfully");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Book created successfully", book_id)),
    ))
}

#[instrument(skip(state, body), fields(book_id = %book_id))]
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateBookDTO>,
) -> Result<Json<MessageResponse>, AppError> {
    debug!("Updating book");
    // 1. Costruire l'UPDATE solo con i campi presenti nel body
    // 2. Nessun campo presente -> BAD_REQUEST "No fields to update"
    // 3. Nessuna riga modificata -> NOT_FOUND
    let affected = state.book.update(&book_id, &body).await?;
    if affected == 0 {
        warn!("Book not found or no changes made");
        return Err(AppError::not_found("Book not found or no changes made"));
    }

    info!("Book updated successfully");
    Ok(Json(MessageResponse::new("Book updated successfully", book_id)))
}

#[instrument(skip(state), fields(book_id = %book_id))]
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    debug!("Deleting book");
    let affected = state.book.delete(&book_id).await?;
    if affected == 0 {
        warn!("Book not found");
        return Err(AppError::not_found("Book not found"));
    }

    info!("Book deleted successfully");
    Ok(Json(MessageResponse::new("Book deleted successfully", book_id)))
}
