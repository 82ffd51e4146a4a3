//! Book entity - Entità libro

use crate::db::{Row, StoreError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Chiave opaca generata dal database
    pub id: String,
    pub name: String,
    pub pages_count: i32,
    pub publication_date: NaiveDate,
    // solo l'id: l'autore non viene caricato insieme al libro
    pub author_id: String,
}

impl Book {
    /// Colonne lette da `TryFrom<&Row>`, nello stesso ordine
    pub const COLUMNS: &'static str = "id, name, pages_count, publication_date, author_id";
}

impl TryFrom<&Row> for Book {
    type Error = StoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.text(0)?,
            name: row.text(1)?,
            pages_count: row.int(2)?,
            publication_date: row.date(3)?,
            author_id: row.text(4)?,
        })
    }
}
