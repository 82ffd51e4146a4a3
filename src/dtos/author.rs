//! Author DTOs - Data Transfer Objects per autori

use crate::db::SqlValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per registrare un autore: obbligatorio solo il nome
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAuthorDTO {
    #[validate(length(min = 1, message = "Author name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub death_date: Option<NaiveDate>,
}

/// DTO per aggiornare un autore (aggiornamento parziale)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateAuthorDTO {
    #[validate(length(min = 1, message = "Author name must not be empty"))]
    pub name: Option<String>,

    pub birth_date: Option<NaiveDate>,

    pub death_date: Option<NaiveDate>,
}

impl UpdateAuthorDTO {
    pub fn columns(&self) -> Vec<(&'static str, Option<SqlValue>)> {
        vec![
            ("name", self.name.as_ref().map(SqlValue::from)),
            ("birthdate", self.birth_date.map(SqlValue::from)),
            ("death_date", self.death_date.map(SqlValue::from)),
        ]
    }
}
