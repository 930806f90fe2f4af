use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use super::{constraints, JobStore, StoreError};
use crate::database::{
    models::{Job, NewJob},
    schema::jobs,
    Pool
};

/// [`JobStore`] over the `jobs` table. Every operation is a single
/// autocommitted statement on a pooled connection.
pub struct PgJobStore {
    pool: Pool
}

impl PgJobStore {
    pub fn new(pool: Pool) -> Self {
        PgJobStore { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn list(&self) -> Result<Vec<Job>, StoreError> {
        let mut conn = self.pool.get().await?;
        let rows = jobs::table
            .select(Job::as_select())
            .order(jobs::id.asc())
            .load(&mut conn)
            .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Job>, StoreError> {
        let mut conn = self.pool.get().await?;
        debug!("Attempting to find job {} in database!", id);
        let job = jobs::table
            .find(id)
            .select(Job::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(job)
    }

    async fn create(&self, new_job: &NewJob) -> Result<Job, StoreError> {
        let row = constraints::check(new_job)?;
        let mut conn = self.pool.get().await?;
        let job = diesel::insert_into(jobs::table)
            .values(&row)
            .returning(Job::as_returning())
            .get_result(&mut conn)
            .await?;

        Ok(job)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;
        let deleted = diesel::delete(jobs::table.find(id))
            .execute(&mut conn)
            .await?;

        debug!("Deleted {} row(s) for job {}", deleted, id);
        Ok(())
    }
}
