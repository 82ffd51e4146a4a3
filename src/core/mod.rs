//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Configurazione
//! - Gestione errori ed estrazione dei body JSON
//! - Middleware di logging
//! - Stato applicazione

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::AppError;
pub use extract::ValidatedJson;
pub use middleware::request_logger;
pub use state::AppState;
