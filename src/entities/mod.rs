//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella e sa decodificarsi da una `Row` restituita
//! dall'executor (le colonne arrivano nell'ordine della SELECT del repository).

pub mod author;
pub mod book;

// Re-exports per facilitare l'import
pub use author::Author;
pub use book::Book;
