//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene i repository, tutti costruiti sopra lo stesso executor.
//! L'executor viene creato esplicitamente all'avvio (niente pool globale) e nei test
//! può essere sostituito con un'implementazione finta.

use crate::db::Executor;
use crate::repositories::{AuthorRepository, BookRepository};
use std::sync::Arc;

/// Stato condiviso tra tutte le route e i middleware
pub struct AppState {
    /// Repository per la gestione dei libri
    pub book: BookRepository,

    /// Repository per la gestione degli autori
    pub author: AuthorRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con l'executor fornito.
    ///
    /// # Arguments
    /// * `executor` - Executor condiviso (in produzione `PgExecutor` sopra il pool)
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self {
            book: BookRepository::new(executor.clone()),
            author: AuthorRepository::new(executor),
        }
    }
}
