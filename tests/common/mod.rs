#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use crud_books::core::AppState;
use crud_books::db::{Executor, Row, SqlValue, Statement, StoreError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Risposta preparata per la prossima chiamata all'executor
pub enum Reply {
    Rows(Vec<Row>),
    Affected(u64),
    Fail(StoreError),
}

/// Executor finto: restituisce le risposte preparate in ordine e registra ogni statement.
///
/// Senza risposte in coda si comporta come una tabella vuota
/// (nessuna riga, `0` righe modificate).
#[derive(Default)]
pub struct MockExecutor {
    replies: Mutex<VecDeque<Reply>>,
    statements: Mutex<Vec<Statement>>,
}

impl MockExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_rows(&self, rows: Vec<Row>) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Rows(rows));
        self
    }

    pub fn push_affected(&self, affected: u64) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Affected(affected));
        self
    }

    pub fn push_failure(&self, err: StoreError) -> &Self {
        self.replies.lock().unwrap().push_back(Reply::Fail(err));
        self
    }

    /// Tutti gli statement ricevuti, in ordine
    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    fn next_reply(&self, statement: &Statement) -> Option<Reply> {
        self.statements.lock().unwrap().push(statement.clone());
        self.replies.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl Executor for MockExecutor {
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Row>, StoreError> {
        match self.next_reply(statement) {
            None => Ok(Vec::new()),
            Some(Reply::Rows(rows)) => Ok(rows),
            Some(Reply::Fail(err)) => Err(err),
            Some(Reply::Affected(_)) => panic!("fetch_all got an affected-rows reply"),
        }
    }

    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<Row>, StoreError> {
        match self.next_reply(statement) {
            None => Ok(None),
            Some(Reply::Rows(rows)) => Ok(rows.into_iter().next()),
            Some(Reply::Fail(err)) => Err(err),
            Some(Reply::Affected(_)) => panic!("fetch_optional got an affected-rows reply"),
        }
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, StoreError> {
        match self.next_reply(statement) {
            None => Ok(0),
            Some(Reply::Affected(affected)) => Ok(affected),
            Some(Reply::Fail(err)) => Err(err),
            Some(Reply::Rows(_)) => panic!("execute got a rows reply"),
        }
    }
}

/// Crea un TestServer sopra il router reale e l'executor finto
///
/// # Arguments
/// * `executor` - MockExecutor condiviso con il test per preparare risposte e leggere gli statement
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(executor: Arc<MockExecutor>) -> TestServer {
    create_test_server_with_timeout(executor, Duration::from_secs(30))
}

/// Come `create_test_server`, con un timeout per richiesta scelto dal test
/// e un executor qualsiasi
pub fn create_test_server_with_timeout(
    executor: Arc<dyn Executor>,
    request_timeout: Duration,
) -> TestServer {
    let state = Arc::new(AppState::new(executor));
    let app = crud_books::create_router(state, request_timeout);
    TestServer::new(app).expect("Failed to create test server")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Riga come restituita dalla SELECT dei libri
pub fn book_row(id: &str, name: &str, pages: i32, published: NaiveDate, author_id: &str) -> Row {
    Row::new(vec![
        SqlValue::from(id),
        SqlValue::from(name),
        SqlValue::Int(pages),
        SqlValue::Date(published),
        SqlValue::from(author_id),
    ])
}

/// Riga come restituita dalla SELECT degli autori
pub fn author_row(
    id: &str,
    name: &str,
    birth: Option<NaiveDate>,
    death: Option<NaiveDate>,
) -> Row {
    Row::new(vec![
        SqlValue::from(id),
        SqlValue::from(name),
        SqlValue::from(birth),
        SqlValue::from(death),
    ])
}

/// Riga restituita da `INSERT ... RETURNING id`
pub fn id_row(id: &str) -> Row {
    Row::new(vec![SqlValue::from(id)])
}
