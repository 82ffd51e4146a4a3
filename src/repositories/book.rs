//! BookRepository - Repository per la gestione dei libri

use super::{Create, Delete, Read, ReadAll, Update};
use crate::db::{Executor, Statement, StoreError, build_update};
use crate::dtos::{CreateBookDTO, UpdateBookDTO};
use crate::entities::Book;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// BOOK REPOSITORY
pub struct BookRepository {
    executor: Arc<dyn Executor>,
}

impl BookRepository {
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self { executor }
    }
}

impl Create<CreateBookDTO, String> for BookRepository {
    #[instrument(skip(self, data), fields(author_id = %data.author_id))]
    async fn create(&self, data: &CreateBookDTO) -> Result<String, StoreError> {
        debug!("Creating new book");
        let statement = Statement::new(
            "INSERT INTO books (name, pages_count, publication_date, author_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&data.name)
        .bind(data.pages_count)
        .bind(data.publication_date)
        .bind(&data.author_id);

        let row = self
            .executor
            .fetch_optional(&statement)
            .await?
            .ok_or_else(|| StoreError::Decode("INSERT did not return the new id".to_string()))?;
        let new_id = row.text(0)?;

        info!("Book created with id {}", new_id);
        Ok(new_id)
    }
}

impl Read<Book, String> for BookRepository {
    #[instrument(skip(self), fields(book_id = %id))]
    async fn read(&self, id: &String) -> Result<Option<Book>, StoreError> {
        debug!("Reading book by id");
        let statement = Statement::new(format!(
            "SELECT {} FROM books WHERE id = $1",
            Book::COLUMNS
        ))
        .bind(id);

        let book = self
            .executor
            .fetch_optional(&statement)
            .await?
            .as_ref()
            .map(Book::try_from)
            .transpose()?;

        if book.is_some() {
            debug!("Book found");
        } else {
            debug!("Book not found");
        }

        Ok(book)
    }
}

impl ReadAll<Book> for BookRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Book>, StoreError> {
        debug!("Reading all books");
        let statement = Statement::new(format!(
            "SELECT {} FROM books ORDER BY id",
            Book::COLUMNS
        ));

        let books = self
            .executor
            .fetch_all(&statement)
            .await?
            .iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Read {} books", books.len());
        Ok(books)
    }
}

impl Update<UpdateBookDTO, String> for BookRepository {
    #[instrument(skip(self, data), fields(book_id = %id))]
    async fn update(&self, id: &String, data: &UpdateBookDTO) -> Result<u64, StoreError> {
        debug!("Updating book");
        let statement = build_update("books", data.columns(), "id", id)?;

        let affected = self.executor.execute(&statement).await?;

        info!("Book update affected {} rows", affected);
        Ok(affected)
    }
}

impl Delete<String> for BookRepository {
    #[instrument(skip(self), fields(book_id = %id))]
    async fn delete(&self, id: &String) -> Result<u64, StoreError> {
        debug!("Deleting book");
        let statement = Statement::new("DELETE FROM books WHERE id = $1").bind(id);

        let affected = self.executor.execute(&statement).await?;

        info!("Book delete affected {} rows", affected);
        Ok(affected)
    }
}
