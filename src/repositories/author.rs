//! AuthorRepository - Repository per la gestione degli autori

use super::{Create, Delete, Read, ReadAll, Update};
use crate::db::{Executor, Statement, StoreError, build_update};
use crate::dtos::{CreateAuthorDTO, UpdateAuthorDTO};
use crate::entities::Author;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// AUTHOR REPOSITORY
pub struct AuthorRepository {
    executor: Arc<dyn Executor>,
}

impl AuthorRepository {
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self { executor }
    }
}

impl Create<CreateAuthorDTO, String> for AuthorRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateAuthorDTO) -> Result<String, StoreError> {
        debug!("Registering new author");
        // le date possono essere NULL: il cast esplicito tiene il tipo del parametro coerente
        let statement = Statement::new(
            "INSERT INTO authors (name, birthdate, death_date) \
             VALUES ($1, $2::date, $3::date) \
             RETURNING id",
        )
        .bind(&data.name)
        .bind(data.birth_date)
        .bind(data.death_date);

        let row = self
            .executor
            .fetch_optional(&statement)
            .await?
            .ok_or_else(|| StoreError::Decode("INSERT did not return the new id".to_string()))?;
        let new_id = row.text(0)?;

        info!("Author registered with id {}", new_id);
        Ok(new_id)
    }
}

impl Read<Author, String> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn read(&self, id: &String) -> Result<Option<Author>, StoreError> {
        debug!("Reading author by id");
        let statement = Statement::new(format!(
            "SELECT {} FROM authors WHERE id = $1",
            Author::COLUMNS
        ))
        .bind(id);

        let author = self
            .executor
            .fetch_optional(&statement)
            .await?
            .as_ref()
            .map(Author::try_from)
            .transpose()?;

        if author.is_some() {
            debug!("Author found");
        } else {
            debug!("Author not found");
        }

        Ok(author)
    }
}

impl ReadAll<Author> for AuthorRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Author>, StoreError> {
        debug!("Reading all authors");
        let statement = Statement::new(format!(
            "SELECT {} FROM authors ORDER BY id",
            Author::COLUMNS
        ));

        let authors = self
            .executor
            .fetch_all(&statement)
            .await?
            .iter()
            .map(Author::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Read {} authors", authors.len());
        Ok(authors)
    }
}

impl Update<UpdateAuthorDTO, String> for AuthorRepository {
    #[instrument(skip(self, data), fields(author_id = %id))]
    async fn update(&self, id: &String, data: &UpdateAuthorDTO) -> Result<u64, StoreError> {
        debug!("Updating author");
        let statement = build_update("authors", data.columns(), "id", id)?;

        let affected = self.executor.execute(&statement).await?;

        info!("Author update affected {} rows", affected);
        Ok(affected)
    }
}

impl Delete<String> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn delete(&self, id: &String) -> Result<u64, StoreError> {
        debug!("Deleting author");
        let statement = Statement::new("DELETE FROM authors WHERE id = $1").bind(id);

        let affected = self.executor.execute(&statement).await?;

        info!("Author delete affected {} rows", affected);
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PgExecutor;
    use chrono::NaiveDate;
    use sqlx::PgPool;

    fn repository(pool: PgPool) -> AuthorRepository {
        AuthorRepository::new(Arc::new(PgExecutor::new(pool)))
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("authors")))]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn test_register_with_name_only(pool: PgPool) -> sqlx::Result<()> {
        let repo = repository(pool);

        let new_id = repo
            .create(&CreateAuthorDTO {
                name: "Tolkien".to_string(),
                birth_date: None,
                death_date: None,
            })
            .await
            .unwrap();

        let author = repo.read(&new_id).await.unwrap().unwrap();
        assert_eq!(author.name, "Tolkien");
        assert_eq!(author.birth_date, None);
        assert_eq!(author.death_date, None);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("authors")))]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn test_read_all_keeps_null_dates(pool: PgPool) -> sqlx::Result<()> {
        let repo = repository(pool);

        let authors = repo.read_all().await.unwrap();
        assert_eq!(authors.len(), 3);

        let anonymous = authors.iter().find(|a| a.id == "c-unknown").unwrap();
        assert_eq!(anonymous.birth_date, None);

        let tolkien = authors.iter().find(|a| a.id == "a-tolkien").unwrap();
        assert_eq!(tolkien.birth_date, NaiveDate::from_ymd_opt(1892, 1, 3));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("authors")))]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn test_update_birth_date(pool: PgPool) -> sqlx::Result<()> {
        let repo = repository(pool);
        let id = "c-unknown".to_string();

        let patch = UpdateAuthorDTO {
            birth_date: NaiveDate::from_ymd_opt(1900, 5, 17),
            ..Default::default()
        };
        assert_eq!(repo.update(&id, &patch).await.unwrap(), 1);

        let author = repo.read(&id).await.unwrap().unwrap();
        assert_eq!(author.birth_date, NaiveDate::from_ymd_opt(1900, 5, 17));
        assert_eq!(author.name, "Anonymous");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("authors", "books")))]
    #[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
    async fn test_delete_author_with_books_is_rejected(pool: PgPool) -> sqlx::Result<()> {
        let repo = repository(pool);

        let result = repo.delete(&"a-tolkien".to_string()).await;
        assert!(matches!(result, Err(StoreError::Execution(_))));

        assert_eq!(repo.delete(&"c-unknown".to_string()).await.unwrap(), 1);
        assert_eq!(repo.delete(&"c-unknown".to_string()).await.unwrap(), 0);
        Ok(())
    }
}
