//! Response DTOs - Buste fisse delle risposte JSON
//!
//! Gli errori hanno la loro busta in `core::error`.

use crate::entities::{Author, Book};
use serde::Serialize;

/// `{message, id}` per create, update e delete
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: &'static str,
    pub id: String,
}

impl MessageResponse {
    pub fn new(message: &'static str, id: impl Into<String>) -> Self {
        Self {
            message,
            id: id.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct BookListResponse {
    pub count: usize,
    pub books: Vec<Book>,
}

impl From<Vec<Book>> for BookListResponse {
    fn from(books: Vec<Book>) -> Self {
        Self {
            count: books.len(),
            books,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct AuthorListResponse {
    pub count: usize,
    pub authors: Vec<Author>,
}

impl From<Vec<Author>> for AuthorListResponse {
    fn from(authors: Vec<Author>) -> Self {
        Self {
            count: authors.len(),
            authors,
        }
    }
}
