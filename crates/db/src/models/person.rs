//! Person model and DTOs.

use std::cmp::Ordering;

use people_core::search::PersonField;
use people_core::types::{PersonId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `people` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub favorite_food: Option<String>,
    pub favorite_movie: Option<String>,
    pub status: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Person {
    /// Value of a text field, or `None` for non-text fields and null values.
    pub fn text_value(&self, field: PersonField) -> Option<&str> {
        match field {
            PersonField::Name => Some(self.name.as_str()),
            PersonField::FavoriteFood => self.favorite_food.as_deref(),
            PersonField::FavoriteMovie => self.favorite_movie.as_deref(),
            PersonField::Status => self.status.as_deref(),
            PersonField::Id
            | PersonField::Active
            | PersonField::CreatedAt
            | PersonField::UpdatedAt => None,
        }
    }

    /// Ascending comparison on `field`, placing nulls last as PostgreSQL does.
    pub fn compare_by(&self, other: &Person, field: PersonField) -> Ordering {
        match field {
            PersonField::Id => self.id.cmp(&other.id),
            PersonField::Name => self.name.cmp(&other.name),
            PersonField::FavoriteFood => nulls_last(&self.favorite_food, &other.favorite_food),
            PersonField::FavoriteMovie => nulls_last(&self.favorite_movie, &other.favorite_movie),
            PersonField::Status => nulls_last(&self.status, &other.status),
            PersonField::Active => self.active.cmp(&other.active),
            PersonField::CreatedAt => self.created_at.cmp(&other.created_at),
            PersonField::UpdatedAt => self.updated_at.cmp(&other.updated_at),
        }
    }
}

fn nulls_last(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a person.
///
/// Every field is optional here; the store rejects a missing `name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    pub name: Option<String>,
    pub favorite_food: Option<String>,
    pub favorite_movie: Option<String>,
    pub status: Option<String>,
}

/// DTO for partially updating a person. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub favorite_food: Option<String>,
    pub favorite_movie: Option<String>,
    pub status: Option<String>,
    pub active: Option<bool>,
}

/// Raw search request body. Field names are validated by
/// [`PersonQuery::parse`](people_core::search::PersonQuery::parse).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPeople {
    pub property: Option<String>,
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Result of a batch insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchCount {
    pub count: u64,
}
