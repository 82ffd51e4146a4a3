//! Author entity - Entità autore

use crate::db::{Row, StoreError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    // sul db la colonna si chiama `birthdate`
    pub birth_date: Option<NaiveDate>,
    /// `None` se l'autore è vivente o la data non è nota
    pub death_date: Option<NaiveDate>,
}

impl Author {
    pub const COLUMNS: &'static str = "id, name, birthdate, death_date";
}

impl TryFrom<&Row> for Author {
    type Error = StoreError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.text(0)?,
            name: row.text(1)?,
            birth_date: row.opt_date(2)?,
            death_date: row.opt_date(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqlValue;
    use serde_json::json;

    #[test]
    fn test_decode_living_author() {
        let row = Row::new(vec![
            SqlValue::from("a-2"),
            SqlValue::from("Ursula K. Le Guin"),
            SqlValue::Date(NaiveDate::from_ymd_opt(1929, 10, 21).unwrap()),
            SqlValue::Null,
        ]);

        let author = Author::try_from(&row).unwrap();
        assert_eq!(author.death_date, None);
        assert_eq!(
            serde_json::to_value(&author).unwrap(),
            json!({
                "id": "a-2",
                "name": "Ursula K. Le Guin",
                "birth_date": "1929-10-21",
                "death_date": null
            })
        );
    }

    #[test]
    fn test_decode_rejects_null_name() {
        let row = Row::new(vec![
            SqlValue::from("a-3"),
            SqlValue::Null,
            SqlValue::Null,
            SqlValue::Null,
        ]);

        assert!(matches!(Author::try_from(&row), Err(StoreError::Decode(_))));
    }
}
