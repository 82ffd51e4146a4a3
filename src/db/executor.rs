//! Executor - contratto per eseguire statement parametrizzati
//!
//! I repository non conoscono il pool: costruiscono uno `Statement` (SQL con placeholder
//! `$n` + lista ordinata di argomenti) e lo passano a un `Executor`.

use super::{Row, SqlValue, StoreError};
use async_trait::async_trait;

/// A SQL template with positional placeholders and the arguments bound to them, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Appends the argument for the next placeholder.
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.args.push(value.into());
        self
    }
}

/// Runs statements against the store.
///
/// "Not found" is never an error here: it is an empty row set, `None` from
/// `fetch_optional` or `0` from `execute`.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Runs a query and decodes every row. Any failure discards the rows already read.
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>, StoreError>;

    /// Runs a query returning at most one row. Extra rows are ignored.
    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>, StoreError>;

    /// Runs a statement without result set and returns the number of affected rows.
    async fn execute(&self, statement: &Statement) -> Result<u64, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_keeps_argument_order() {
        let statement = Statement::new("DELETE FROM books WHERE id = $1 AND name = $2")
            .bind("b-1")
            .bind("The Hobbit");

        assert_eq!(
            statement.args,
            vec![SqlValue::from("b-1"), SqlValue::from("The Hobbit")]
        );
    }
}
