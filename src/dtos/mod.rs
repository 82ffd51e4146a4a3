//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod author;
pub mod book;
pub mod response;

// Re-exports per facilitare l'import
pub use author::{CreateAuthorDTO, UpdateAuthorDTO};
pub use book::{CreateBookDTO, UpdateBookDTO};
pub use response::{AuthorListResponse, BookListResponse, MessageResponse};
