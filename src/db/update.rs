//! UPDATE parziali con placeholder posizionali
//!
//! Ogni colonna presente produce un frammento `colonna = $n` e il relativo argomento viene
//! aggiunto nella stessa posizione, quindi numerazione e argomenti restano allineati per
//! costruzione. I frammenti vengono uniti una sola volta alla fine.
//!
//! I nomi di colonna arrivano solo dalle liste fisse dei DTO (`columns()`), mai dal client;
//! i valori sono sempre bindati.

use super::{SqlValue, Statement, StoreError};
use tracing::debug;

/// Collects `SET` assignments for a single-table, single-key UPDATE.
#[derive(Debug)]
pub struct UpdateBuilder<'a> {
    table: &'a str,
    assignments: Vec<String>,
    args: Vec<SqlValue>,
}

impl<'a> UpdateBuilder<'a> {
    pub fn new(table: &'a str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Adds `column = $n` when `value` is present, does nothing otherwise.
    pub fn set(&mut self, column: &str, value: Option<SqlValue>) -> &mut Self {
        if let Some(value) = value {
            self.args.push(value);
            self.assignments
                .push(format!("{} = ${}", column, self.args.len()));
        }
        self
    }

    /// Closes the statement with `WHERE key_column = $n+1`.
    pub fn build(
        self,
        key_column: &str,
        key_value: impl Into<SqlValue>,
    ) -> Result<Statement, StoreError> {
        if self.assignments.is_empty() {
            return Err(StoreError::NoFieldsProvided);
        }

        let mut args = self.args;
        args.push(key_value.into());

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table,
            self.assignments.join(", "),
            key_column,
            args.len()
        );
        debug!(sql = %sql, args = args.len(), "Built partial update");

        Ok(Statement { sql, args })
    }
}

/// Builds `UPDATE <table> SET ... WHERE <key_column> = $n` from an ordered list of
/// optional column values.
///
/// # Returns
/// * `Ok(Statement)` - statement + arguments, key value last
/// * `Err(StoreError::NoFieldsProvided)` - no column carried a value
pub fn build_update<I>(
    table: &str,
    columns: I,
    key_column: &str,
    key_value: impl Into<SqlValue>,
) -> Result<Statement, StoreError>
where
    I: IntoIterator<Item = (&'static str, Option<SqlValue>)>,
{
    let mut builder = UpdateBuilder::new(table);
    for (column, value) in columns {
        builder.set(column, value);
    }
    builder.build(key_column, key_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK_FIELDS: [&str; 4] = ["name", "pages_count", "publication_date", "author_id"];

    /// Tutte le combinazioni dei campi aggiornabili di un libro, mantenendo l'ordine fisso
    fn subsets() -> impl Iterator<Item = Vec<(&'static str, Option<SqlValue>)>> {
        (0u32..(1 << BOOK_FIELDS.len())).map(|mask| {
            BOOK_FIELDS
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = (mask & (1 << i) != 0).then(|| SqlValue::from(format!("v{i}")));
                    (*column, value)
                })
                .collect()
        })
    }

    /// Estrae i numeri dei placeholder `$n` nell'ordine in cui compaiono
    fn placeholders(sql: &str) -> Vec<usize> {
        sql.split('$')
            .skip(1)
            .map(|chunk| {
                let digits: String = chunk.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_single_field_update() {
        let statement = build_update(
            "books",
            vec![
                ("name", None),
                ("pages_count", Some(SqlValue::Int(300))),
                ("publication_date", None),
                ("author_id", None),
            ],
            "id",
            "5",
        )
        .unwrap();

        assert_eq!(statement.sql, "UPDATE books SET pages_count = $1 WHERE id = $2");
        assert_eq!(statement.args, vec![SqlValue::Int(300), SqlValue::from("5")]);
    }

    #[test]
    fn test_multiple_fields_keep_declared_order() {
        let statement = build_update(
            "authors",
            vec![
                ("name", Some(SqlValue::from("J. R. R. Tolkien"))),
                ("birthdate", None),
                ("death_date", Some(SqlValue::from("1973-09-02"))),
            ],
            "id",
            "a-1",
        )
        .unwrap();

        assert_eq!(
            statement.sql,
            "UPDATE authors SET name = $1, death_date = $2 WHERE id = $3"
        );
        assert_eq!(
            statement.args,
            vec![
                SqlValue::from("J. R. R. Tolkien"),
                SqlValue::from("1973-09-02"),
                SqlValue::from("a-1"),
            ]
        );
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        let result = build_update(
            "books",
            BOOK_FIELDS.iter().map(|column| (*column, None)),
            "id",
            "5",
        );
        assert!(matches!(result, Err(StoreError::NoFieldsProvided)));

        let result = build_update("books", Vec::new(), "id", "5");
        assert!(matches!(result, Err(StoreError::NoFieldsProvided)));
    }

    #[test]
    fn test_every_subset_has_contiguous_placeholders() {
        for columns in subsets() {
            let present: Vec<(&str, SqlValue)> = columns
                .iter()
                .filter_map(|(column, value)| value.clone().map(|v| (*column, v)))
                .collect();

            let result = build_update("books", columns, "id", "key");

            if present.is_empty() {
                assert!(matches!(result, Err(StoreError::NoFieldsProvided)));
                continue;
            }

            let statement = result.unwrap();
            let numbers = placeholders(&statement.sql);

            // $1..$n+1 senza buchi né ripetizioni, uno per argomento
            assert_eq!(numbers, (1..=present.len() + 1).collect::<Vec<_>>());
            assert_eq!(statement.args.len(), present.len() + 1);
            assert_eq!(statement.args.last(), Some(&SqlValue::from("key")));

            // ogni colonna presente è legata al proprio valore
            for (i, (column, value)) in present.iter().enumerate() {
                assert!(statement.sql.contains(&format!("{} = ${}", column, i + 1)));
                assert_eq!(&statement.args[i], value);
            }

            assert!(!statement.sql.contains(", WHERE"));
            assert!(statement.sql.ends_with(&format!("WHERE id = ${}", present.len() + 1)));
        }
    }

    #[test]
    fn test_builder_ignores_absent_values() {
        let mut builder = UpdateBuilder::new("books");
        builder
            .set("name", None)
            .set("author_id", Some(SqlValue::from("a-2")));
        let statement = builder.build("id", "b-9").unwrap();

        assert_eq!(statement.sql, "UPDATE books SET author_id = $1 WHERE id = $2");
    }
}
