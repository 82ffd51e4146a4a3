//! Valori SQL: argomenti bindati negli statement e colonne delle righe decodificate

use super::StoreError;
use chrono::NaiveDate;

/// A single positional argument or a single decoded column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Text(String),
    Int(i32),
    Date(NaiveDate),
}

impl SqlValue {
    /// Nome del tipo, usato nei messaggi di errore di decodifica
    fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::Text(_) => "text",
            SqlValue::Int(_) => "integer",
            SqlValue::Date(_) => "date",
        }
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// Una riga restituita dall'executor, con le colonne nello stesso ordine della SELECT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn column(&self, idx: usize) -> Result<&SqlValue, StoreError> {
        self.values.get(idx).ok_or_else(|| {
            StoreError::Decode(format!(
                "column {} requested but the row has {} columns",
                idx,
                self.values.len()
            ))
        })
    }

    fn mismatch(idx: usize, expected: &str, found: &SqlValue) -> StoreError {
        StoreError::Decode(format!(
            "column {} should be {} but is {}",
            idx,
            expected,
            found.kind()
        ))
    }

    pub fn text(&self, idx: usize) -> Result<String, StoreError> {
        match self.column(idx)? {
            SqlValue::Text(value) => Ok(value.clone()),
            other => Err(Self::mismatch(idx, "text", other)),
        }
    }

    pub fn int(&self, idx: usize) -> Result<i32, StoreError> {
        match self.column(idx)? {
            SqlValue::Int(value) => Ok(*value),
            other => Err(Self::mismatch(idx, "integer", other)),
        }
    }

    pub fn date(&self, idx: usize) -> Result<NaiveDate, StoreError> {
        match self.column(idx)? {
            SqlValue::Date(value) => Ok(*value),
            other => Err(Self::mismatch(idx, "date", other)),
        }
    }

    /// Come `date`, ma NULL diventa `None`
    pub fn opt_date(&self, idx: usize) -> Result<Option<NaiveDate>, StoreError> {
        match self.column(idx)? {
            SqlValue::Null => Ok(None),
            SqlValue::Date(value) => Ok(Some(*value)),
            other => Err(Self::mismatch(idx, "date or NULL", other)),
        }
    }
}
