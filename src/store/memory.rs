use std::{collections::BTreeMap, sync::atomic::{AtomicI64, Ordering}};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{constraints, JobStore, StoreError};
use crate::database::models::{Job, NewJob};

/// In-process store used when no database is configured.
///
/// Ids start at 1 and are never reused, even after a delete.
pub struct MemoryJobStore {
    jobs: RwLock<BTreeMap<i64, Job>>,
    next_id: AtomicI64
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        MemoryJobStore {
            jobs: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1)
        }
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list(&self) -> Result<Vec<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn create(&self, new_job: &NewJob) -> Result<Job, StoreError> {
        let row = constraints::check(new_job)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let job = Job {
            id,
            title: row.title.to_owned(),
            company: row.company.to_owned(),
            description: row.description.map(str::to_owned),
            created_at: row.created_at
        };

        self.jobs.write().await.insert(id, job.clone());
        debug!("Stored job {} in memory", id);
        Ok(job)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let removed = self.jobs.write().await.remove(&id);
        debug!("Deleted job {} from memory (existed: {})", id, removed.is_some());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_job(title: &str, company: &str) -> NewJob {
        NewJob {
            title: Some(title.to_string()),
            company: Some(company.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_stored_job() {
        let store = MemoryJobStore::default();
        let created = store.create(&new_job("Engineer", "Acme")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.description, None);

        let found = store.get_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn list_contains_every_created_job() {
        let store = MemoryJobStore::default();
        let mut ids = Vec::new();
        for company in ["Acme", "Globex", "Initech"] {
            ids.push(store.create(&new_job("Engineer", company)).await.unwrap().id);
        }

        let listed: Vec<i64> = store.list().await.unwrap().iter().map(|job| job.id).collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn missing_id_is_not_an_error() {
        let store = MemoryJobStore::default();

        assert_eq!(store.get_by_id(42).await.unwrap(), None);
        assert!(store.delete_by_id(42).await.is_ok());
    }

    #[tokio::test]
    async fn delete_removes_job_and_ids_are_not_reused() {
        let store = MemoryJobStore::default();
        let first = store.create(&new_job("Engineer", "Acme")).await.unwrap();

        store.delete_by_id(first.id).await.unwrap();
        assert_eq!(store.get_by_id(first.id).await.unwrap(), None);

        let second = store.create(&new_job("Designer", "Acme")).await.unwrap();
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn constraint_violation_stores_nothing() {
        let store = MemoryJobStore::default();
        let result = store.create(&new_job("", "Acme")).await;

        assert!(matches!(result, Err(StoreError::Constraint(_))));
        assert!(store.list().await.unwrap().is_empty());
    }
}
