//! Errori del livello di persistenza

use thiserror::Error;

/// Failures reported by the executor, the entity codecs and the update builder.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The patch did not carry a single field, so there is no statement to run.
    #[error("no fields to update")]
    NoFieldsProvided,

    #[error("failed to decode row: {0}")]
    Decode(String),

    #[error("statement execution failed: {0}")]
    Execution(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. } => Self::Decode(err.to_string()),
            _ => Self::Execution(err.to_string()),
        }
    }
}
