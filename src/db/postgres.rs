//! PgExecutor - implementazione dell'Executor sopra il pool PostgreSQL di sqlx

use super::{Executor, Row, SqlValue, Statement, StoreError};
use crate::core::Config;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Postgres, Row as _, TypeInfo, ValueRef};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Executor backed by a bounded connection pool.
///
/// Acquiring a connection suspends the calling task until one is free or
/// `acquire_timeout` expires; dropping the request future abandons the wait.
#[derive(Clone)]
pub struct PgExecutor {
    connection_pool: PgPool,
}

impl PgExecutor {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }

    /// Apre il pool e verifica subito la connessione: un DATABASE_URL non valido o un
    /// server irraggiungibile fanno fallire l'avvio.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .connect(&config.database_url)
            .await?;

        info!(
            max_connections = config.max_connections,
            "Database connection pool ready"
        );
        Ok(Self::new(pool))
    }
}

/// Lega gli argomenti nell'ordine dei placeholder
fn prepare(statement: &Statement) -> Query<'_, Postgres, PgArguments> {
    statement
        .args
        .iter()
        .fold(sqlx::query(&statement.sql), |query, arg| match arg {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Text(value) => query.bind(value.as_str()),
            SqlValue::Int(value) => query.bind(*value),
            SqlValue::Date(value) => query.bind(*value),
        })
}

/// Converte una PgRow in `Row` in base al tipo dichiarato di ogni colonna
fn decode_row(row: &PgRow) -> Result<Row, StoreError> {
    let values = row
        .columns()
        .iter()
        .map(|column| -> Result<SqlValue, StoreError> {
            let idx = column.ordinal();
            let raw = row.try_get_raw(idx)?;
            if raw.is_null() {
                return Ok(SqlValue::Null);
            }

            let type_info = raw.type_info();
            let value = match type_info.name() {
                "TEXT" | "VARCHAR" | "CHAR" | "NAME" => SqlValue::Text(row.try_get(idx)?),
                "INT2" => SqlValue::Int(i32::from(row.try_get::<i16, _>(idx)?)),
                "INT4" => SqlValue::Int(row.try_get(idx)?),
                "INT8" => {
                    let wide: i64 = row.try_get(idx)?;
                    SqlValue::Int(i32::try_from(wide).map_err(|_| {
                        StoreError::Decode(format!(
                            "value {} of column `{}` does not fit in 32 bits",
                            wide,
                            column.name()
                        ))
                    })?)
                }
                "DATE" => SqlValue::Date(row.try_get::<NaiveDate, _>(idx)?),
                other => {
                    return Err(StoreError::Decode(format!(
                        "unsupported type {} for column `{}`",
                        other,
                        column.name()
                    )));
                }
            };
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Row::new(values))
}

#[async_trait]
impl Executor for PgExecutor {
    #[instrument(skip_all, fields(sql = %statement.sql, args = statement.args.len()))]
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
        let rows = prepare(statement).fetch_all(&self.connection_pool).await?;
        debug!("Fetched {} rows", rows.len());
        rows.iter().map(decode_row).collect()
    }

    #[instrument(skip_all, fields(sql = %statement.sql, args = statement.args.len()))]
    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>, StoreError> {
        let row = prepare(statement)
            .fetch_optional(&self.connection_pool)
            .await?;
        row.as_ref().map(decode_row).transpose()
    }

    #[instrument(skip_all, fields(sql = %statement.sql, args = statement.args.len()))]
    async fn execute(&self, statement: &Statement) -> Result<u64, StoreError> {
        let result = prepare(statement).execute(&self.connection_pool).await?;
        debug!("{} rows affected", result.rows_affected());
        Ok(result.rows_affected())
    }
}
