//! DB Module - Accesso al database tramite statement parametrizzati
//!
//! Questo modulo contiene tutto quello che sta tra i repository e il pool di connessioni:
//! - `Executor`: contratto astratto per eseguire uno statement (mockabile nei test)
//! - `PgExecutor`: implementazione reale sopra `sqlx::PgPool`
//! - `UpdateBuilder`: costruzione degli UPDATE parziali con placeholder posizionali
//! - `SqlValue` / `Row`: valori bindati e righe decodificate

pub mod error;
pub mod executor;
pub mod postgres;
pub mod update;
pub mod value;

// Re-exports per facilitare l'import
pub use error::StoreError;
pub use executor::{Executor, Statement};
pub use postgres::PgExecutor;
pub use update::{UpdateBuilder, build_update};
pub use value::{Row, SqlValue};
