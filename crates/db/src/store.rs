//! The storage seam between HTTP handlers and the database.
//!
//! Handlers depend on [`PersonStore`] rather than a pool, so the concrete
//! store is chosen once at startup and injected through application state.

use async_trait::async_trait;
use people_core::search::PersonQuery;
use people_core::types::PersonId;

use crate::error::StoreError;
use crate::models::person::{CreatePerson, Person, UpdatePerson};
use crate::repositories::PersonRepo;
use crate::DbPool;

#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, StoreError>;

    /// `Ok(None)` when no record has this ID.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, StoreError>;

    async fn create(&self, input: &CreatePerson) -> Result<Person, StoreError>;

    /// Insert all records atomically, returning how many were inserted.
    async fn create_many(&self, inputs: &[CreatePerson]) -> Result<u64, StoreError>;

    /// Fails with [`StoreError::NoMatch`] when no record has this ID.
    async fn update(&self, id: PersonId, input: &UpdatePerson) -> Result<Person, StoreError>;

    /// Returns the deleted record. Fails with [`StoreError::NoMatch`] when
    /// no record has this ID.
    async fn delete(&self, id: PersonId) -> Result<Person, StoreError>;

    async fn search(&self, query: &PersonQuery) -> Result<Vec<Person>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`PersonStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgPersonStore {
    pool: DbPool,
}

impl PgPersonStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        Ok(PersonRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, StoreError> {
        Ok(PersonRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &CreatePerson) -> Result<Person, StoreError> {
        Ok(PersonRepo::create(&self.pool, input).await?)
    }

    async fn create_many(&self, inputs: &[CreatePerson]) -> Result<u64, StoreError> {
        Ok(PersonRepo::create_many(&self.pool, inputs).await?)
    }

    async fn update(&self, id: PersonId, input: &UpdatePerson) -> Result<Person, StoreError> {
        PersonRepo::update(&self.pool, id, input)
            .await?
            .ok_or(StoreError::NoMatch(id))
    }

    async fn delete(&self, id: PersonId) -> Result<Person, StoreError> {
        PersonRepo::delete(&self.pool, id)
            .await?
            .ok_or(StoreError::NoMatch(id))
    }

    async fn search(&self, query: &PersonQuery) -> Result<Vec<Person>, StoreError> {
        Ok(PersonRepo::search(&self.pool, query).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
