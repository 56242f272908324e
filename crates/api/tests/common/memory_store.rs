//! In-memory `PersonStore` used by the HTTP tests.
//!
//! Mirrors the PostgreSQL store's observable behaviour: generated ids and
//! timestamps, `name` required, atomic batches, case-sensitive contains
//! filter, default order by creation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use people_core::search::{PersonQuery, SortOrder};
use people_core::types::PersonId;
use people_db::models::person::{CreatePerson, Person, UpdatePerson};
use people_db::{PersonStore, StoreError};

#[derive(Default)]
pub struct MemoryPersonStore {
    people: Mutex<Vec<Person>>,
    unavailable: AtomicBool,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.people.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }

    fn build(input: &CreatePerson) -> Result<Person, StoreError> {
        let name = input.name.clone().ok_or_else(|| {
            StoreError::Constraint(
                "null value in column \"name\" violates not-null constraint".to_string(),
            )
        })?;
        let now = Utc::now();
        Ok(Person {
            id: PersonId::new_v4(),
            name,
            favorite_food: input.favorite_food.clone(),
            favorite_movie: input.favorite_movie.clone(),
            status: input.status.clone(),
            active: true,
            created_at: now,
            updated_at: now,
        })
    }
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        self.check_available()?;
        Ok(self.people.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, StoreError> {
        self.check_available()?;
        let people = self.people.lock().unwrap();
        Ok(people.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: &CreatePerson) -> Result<Person, StoreError> {
        self.check_available()?;
        let person = Self::build(input)?;
        self.people.lock().unwrap().push(person.clone());
        Ok(person)
    }

    async fn create_many(&self, inputs: &[CreatePerson]) -> Result<u64, StoreError> {
        self.check_available()?;
        let batch = inputs
            .iter()
            .map(Self::build)
            .collect::<Result<Vec<_>, _>>()?;
        let count = batch.len() as u64;
        self.people.lock().unwrap().extend(batch);
        Ok(count)
    }

    async fn update(&self, id: PersonId, input: &UpdatePerson) -> Result<Person, StoreError> {
        self.check_available()?;
        let mut people = self.people.lock().unwrap();
        let person = people
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NoMatch(id))?;

        if let Some(name) = &input.name {
            person.name = name.clone();
        }
        if let Some(food) = &input.favorite_food {
            person.favorite_food = Some(food.clone());
        }
        if let Some(movie) = &input.favorite_movie {
            person.favorite_movie = Some(movie.clone());
        }
        if let Some(status) = &input.status {
            person.status = Some(status.clone());
        }
        if let Some(active) = input.active {
            person.active = active;
        }
        person.updated_at = Utc::now().max(person.updated_at + Duration::microseconds(1));

        Ok(person.clone())
    }

    async fn delete(&self, id: PersonId) -> Result<Person, StoreError> {
        self.check_available()?;
        let mut people = self.people.lock().unwrap();
        let index = people
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NoMatch(id))?;
        Ok(people.remove(index))
    }

    async fn search(&self, query: &PersonQuery) -> Result<Vec<Person>, StoreError> {
        self.check_available()?;
        let mut results: Vec<Person> = self
            .people
            .lock()
            .unwrap()
            .iter()
            .filter(|p| match &query.filter {
                Some(filter) => p
                    .text_value(filter.field)
                    .is_some_and(|value| value.contains(filter.needle.as_str())),
                None => true,
            })
            .cloned()
            .collect();

        if let Some(sort) = query.sort {
            // Stable sort keeps insertion order as the tiebreaker.
            results.sort_by(|a, b| {
                let ordering = a.compare_by(b, sort.field);
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        Ok(results)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
