//! Book DTOs - Data Transfer Objects per libri

use crate::db::SqlValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per creare un nuovo libro (senza id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateBookDTO {
    #[validate(length(min = 1, message = "Book name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "Pages count must be a positive number"))]
    pub pages_count: i32,

    // formato YYYY-MM-DD, una data non valida viene scartata già in deserializzazione
    pub publication_date: NaiveDate,

    #[validate(length(min = 1, message = "Author id must not be empty"))]
    pub author_id: String,
}

/// DTO per aggiornare un libro: solo i campi `Some(_)` vengono modificati
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateBookDTO {
    #[validate(length(min = 1, message = "Book name must not be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 1, message = "Pages count must be a positive number"))]
    pub pages_count: Option<i32>,

    pub publication_date: Option<NaiveDate>,

    #[validate(length(min = 1, message = "Author id must not be empty"))]
    pub author_id: Option<String>,
}

impl UpdateBookDTO {
    /// Colonne aggiornabili nell'ordine fisso usato per costruire l'UPDATE
    pub fn columns(&self) -> Vec<(&'static str, Option<SqlValue>)> {
        vec![
            ("name", self.name.as_ref().map(SqlValue::from)),
            ("pages_count", self.pages_count.map(SqlValue::from)),
            ("publication_date", self.publication_date.map(SqlValue::from)),
            ("author_id", self.author_id.as_ref().map(SqlValue::from)),
        ]
    }
}
