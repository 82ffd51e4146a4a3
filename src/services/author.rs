//! Author services - Gestione autori

use crate::core::{AppError, AppState, ValidatedJson};
use crate::dtos::{AuthorListResponse, CreateAuthorDTO, MessageResponse, UpdateAuthorDTO};
use crate::entities::Author;
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>, // parametro dalla URL /api/author/{author_id}
) -> Result<Json<Author>, AppError> {
    debug!("Fetching author by ID");
    let author = state.author.read(&author_id).await?.ok_or_else(|| {
        warn!("Author not found");
        AppError::not_found("Author not found")
    })?;

    info!("Author found");
    Ok(Json(author))
}

#[instrument(skip(state))]
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AuthorListResponse>, AppError> {
    debug!("Listing all authors");
    let authors = state.author.read_all().await?;
    info!("Retrieved {} authors", authors.len());
    Ok(Json(AuthorListResponse::from(authors)))
}

#[instrument(skip(state, body))]
pub async fn register_author(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateAuthorDTO>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    debug!("Registering new author");
    // 1. Il body è già stato validato: serve solo il nome, le date sono opzionali
    // 2. Inserire l'autore e ritornare CREATED con l'id generato
    let author_id = state.author.create(&body).await?;

    info!("Author registered successfully");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Author registered successfully",
            author_id,
        )),
    ))
}

#[instrument(skip(state, body), fields(author_id = %author_id))]
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateAuthorDTO>,
) -> Result<Json<MessageResponse>, AppError> {
    debug!("Updating author");
    let affected = state.author.update(&author_id, &body).await?;
    if affected == 0 {
        warn!("Author not found or no changes made");
        return Err(AppError::not_found("Author not found or no changes made"));
    }

    info!("Author updated successfully");
    Ok(Json(MessageResponse::new(
        "Author updated successfully",
        author_id,
    )))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    debug!("Deleting author");
    // un autore con libri associati viene rifiutato dalla foreign key -> INTERNAL_SERVER_ERROR
    let affected = state.author.delete(&author_id).await?;
    if affected == 0 {
        warn!("Author not found");
        return Err(AppError::not_found("Author not found"));
    }

    info!("Author deleted successfully");
    Ok(Json(MessageResponse::new(
        "Author deleted successfully",
        author_id,
    )))
}
