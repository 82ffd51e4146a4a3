//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Every operation maps to exactly one statement; "not found" is reported through the
//! return value (`None`, `0` affected rows), never as an error.

use crate::db::StoreError;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `CreateDTO` - DTO for creation (without ID, will be generated by the database)
/// * `Id` - Type of the primary key assigned by the database
pub trait Create<CreateDTO, Id> {
    /// Inserts a new row
    ///
    /// # Returns
    /// * `Ok(Id)` - Primary key assigned by the database
    /// * `Err(StoreError)` - Error during insertion (e.g. foreign key violation)
    async fn create(&self, data: &CreateDTO) -> Result<Id, StoreError>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(StoreError)` - Error during reading or decoding
    async fn read(&self, id: &Id) -> Result<Option<Entity>, StoreError>;
}

/// Trait for reading every entity of a table
pub trait ReadAll<Entity> {
    /// Reads all rows ordered by primary key
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All entities (can be empty)
    /// * `Err(StoreError)` - Error during reading; a row that fails to decode discards the whole list
    async fn read_all(&self) -> Result<Vec<Entity>, StoreError>;
}

/// Trait for partially updating existing entities
///
/// # Type Parameters
/// * `UpdateDTO` - DTO for updating (optional fields for partial updates)
/// * `Id` - Type of the primary key
pub trait Update<UpdateDTO, Id> {
    /// Updates the `Some(_)` fields of `data` on the row identified by `id`
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of affected rows (`0` when the ID does not exist)
    /// * `Err(StoreError::NoFieldsProvided)` - `data` has no field set
    /// * `Err(StoreError)` - Error during update
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<u64, StoreError>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of deleted rows (`0` when the ID does not exist)
    /// * `Err(StoreError)` - Error during deletion
    async fn delete(&self, id: &Id) -> Result<u64, StoreError>;
}
