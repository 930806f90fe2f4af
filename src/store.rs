//! Persistence of [`Job`] records.
//!
//! Request handlers only ever see the [`JobStore`] trait. Which backend sits
//! behind it is decided once at startup from configuration.

pub mod constraints;
mod memory;
mod postgres;

pub use memory::MemoryJobStore;
pub use postgres::PgJobStore;

use async_trait::async_trait;
use diesel_async::pooled_connection::PoolError;
use thiserror::Error;

use crate::database::models::{Job, NewJob};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("unable to check out a connection: {0}")]
    Connection(#[from] bb8::RunError<PoolError>),

    /// A column constraint (required, non-empty, max length) was violated.
    #[error("constraint violated: {0}")]
    Constraint(String),
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Every stored job, in ascending id order.
    async fn list(&self) -> Result<Vec<Job>, StoreError>;

    /// `Ok(None)` when no job has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Job>, StoreError>;

    /// Checks the column constraints, assigns a fresh id (and `created_at`
    /// when the payload has none) and returns the stored row.
    async fn create(&self, new_job: &NewJob) -> Result<Job, StoreError>;

    /// Removing an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}
