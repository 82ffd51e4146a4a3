//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! I repository non parlano direttamente con il pool: costruiscono uno `Statement`
//! (SQL con placeholder `$n` + argomenti) e lo consegnano all'`Executor` condiviso.
//! Le query sono quindi controllate a runtime e non con le macro `query!`, che
//! richiederebbero un database raggiungibile in fase di compilazione.
//!
//! | Operazione | Metodo dell'executor | Risultato "non trovato" |
//! |------------|----------------------|-------------------------|
//! | create     | `fetch_optional`     | -                       |
//! | read       | `fetch_optional`     | `None`                  |
//! | read_all   | `fetch_all`          | lista vuota             |
//! | update     | `execute`            | `0` righe               |
//! | delete     | `execute`            | `0` righe               |

// Dichiarazione dei sotto-moduli
pub mod author;
pub mod book;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use author::AuthorRepository;
pub use book::BookRepository;
