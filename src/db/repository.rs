//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the tool layer.
//!
//! Futures are declared `Send` so callers can move work onto a spawned
//! task while staying generic over the backend.

use std::future::Future;

use crate::db::{DbResult, NewProperty, Property, PropertyPatch, PropertyQuery};

/// Data access for properties within one open unit of work.
///
/// Implementations stage their changes in the unit of work. They never
/// commit or roll back; that is the caller's job.
pub trait PropertyRepository {
    /// Get every property in storage order.
    fn list_all(&mut self) -> impl Future<Output = DbResult<Vec<Property>>> + Send;

    /// Search properties by city, price range and status.
    ///
    /// An unrecognized status filters as `available`.
    fn search(
        &mut self,
        query: &PropertyQuery,
    ) -> impl Future<Output = DbResult<Vec<Property>>> + Send;

    /// Get a property by ID. Missing properties are `Ok(None)`.
    fn get(&mut self, id: &str) -> impl Future<Output = DbResult<Option<Property>>> + Send;

    /// Create a new property.
    ///
    /// Fails with `Validation` for a blank ID, `UnknownStatus` for an
    /// unrecognized status and `AlreadyExists` for a duplicate ID.
    fn create(&mut self, property: &NewProperty)
    -> impl Future<Output = DbResult<Property>> + Send;

    /// Apply a partial update. Returns `Ok(None)` if the property is missing.
    fn update(
        &mut self,
        id: &str,
        patch: &PropertyPatch,
    ) -> impl Future<Output = DbResult<Option<Property>>> + Send;

    /// Delete a property. Returns `Ok(false)` if it did not exist.
    fn delete(&mut self, id: &str) -> impl Future<Output = DbResult<bool>> + Send;

    /// Insert the sample listings if the catalog is empty.
    ///
    /// Returns `Ok(false)` without writing anything when data exists.
    fn seed(&mut self) -> impl Future<Output = DbResult<bool>> + Send;
}

/// A scoped store session bounding one logical operation.
///
/// Dropping a unit of work without committing rolls it back.
pub trait UnitOfWork: PropertyRepository + Send {
    /// Make the staged changes durable.
    fn commit(self) -> impl Future<Output = DbResult<()>> + Send;

    /// Discard the staged changes.
    fn rollback(self) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type UnitOfWork: UnitOfWork + 'static;

    /// Create tables and indexes if they do not exist.
    fn init_schema(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Open a new unit of work.
    fn begin(&self) -> impl Future<Output = DbResult<Self::UnitOfWork>> + Send;
}

/// Close a unit of work according to the outcome of its operation.
///
/// Commits on `Ok` and rolls back on `Err`. A failed commit replaces the
/// outcome with the commit error; a failed rollback keeps the original error.
pub async fn settle<U, T>(uow: U, outcome: DbResult<T>) -> DbResult<T>
where
    U: UnitOfWork,
    T: Send,
{
    match outcome {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = uow.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(e)
        }
    }
}
