//! Repository for the `people` table.

use people_core::search::PersonQuery;
use people_core::types::PersonId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list for `people` queries.
const COLUMNS: &str = "\
    id, name, favorite_food, favorite_movie, status, active, \
    created_at, updated_at";

/// Store-default ordering, used whenever a request does not ask for one.
const DEFAULT_ORDER: &str = "created_at, id";

/// Provides data access for person records.
pub struct PersonRepo;

impl PersonRepo {
    /// List every person in default order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY {DEFAULT_ORDER}");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &PgPool, id: PersonId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a person. `id`, `active` and timestamps come from column defaults.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (name, favorite_food, favorite_movie, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.favorite_food)
            .bind(&input.favorite_movie)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Insert many people with one `INSERT ... SELECT FROM UNNEST` statement.
    ///
    /// A single statement is atomic: either every row is inserted or none
    /// are. Returns the number inserted.
    pub async fn create_many(pool: &PgPool, inputs: &[CreatePerson]) -> Result<u64, sqlx::Error> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let names: Vec<Option<String>> = inputs.iter().map(|p| p.name.clone()).collect();
        let foods: Vec<Option<String>> = inputs.iter().map(|p| p.favorite_food.clone()).collect();
        let movies: Vec<Option<String>> = inputs.iter().map(|p| p.favorite_movie.clone()).collect();
        let statuses: Vec<Option<String>> = inputs.iter().map(|p| p.status.clone()).collect();

        let result = sqlx::query(
            "INSERT INTO people (name, favorite_food, favorite_movie, status) \
             SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[], $4::text[])",
        )
        .bind(&names)
        .bind(&foods)
        .bind(&movies)
        .bind(&statuses)
        .execute(pool)
        .await?;

        let count = result.rows_affected();
        tracing::debug!(count, "Inserted person batch");
        Ok(count)
    }

    /// Partially update a person.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `updated_at`
    /// always advances. Returns `None` if no row has this ID.
    pub async fn update(
        pool: &PgPool,
        id: PersonId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET \
                 name = COALESCE($2, name), \
                 favorite_food = COALESCE($3, favorite_food), \
                 favorite_movie = COALESCE($4, favorite_movie), \
                 status = COALESCE($5, status), \
                 active = COALESCE($6, active), \
                 updated_at = GREATEST(NOW(), updated_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.favorite_food)
            .bind(&input.favorite_movie)
            .bind(&input.status)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person, returning the row as it was before deletion.
    pub async fn delete(pool: &PgPool, id: PersonId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("DELETE FROM people WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Run a validated search.
    ///
    /// Column names come from the [`PersonField`](people_core::search::PersonField)
    /// allow-list; the needle is always a bind parameter.
    pub async fn search(pool: &PgPool, params: &PersonQuery) -> Result<Vec<Person>, sqlx::Error> {
        let where_clause = match &params.filter {
            Some(filter) => format!("WHERE strpos({}, $1) > 0", filter.field.column()),
            None => String::new(),
        };

        let order_clause = match &params.sort {
            Some(sort) => format!(
                "{} {}, {DEFAULT_ORDER}",
                sort.field.column(),
                sort.order.as_sql()
            ),
            None => DEFAULT_ORDER.to_string(),
        };

        let query = format!("SELECT {COLUMNS} FROM people {where_clause} ORDER BY {order_clause}");

        let mut q = sqlx::query_as::<_, Person>(&query);
        if let Some(filter) = &params.filter {
            q = q.bind(&filter.needle);
        }
        q.fetch_all(pool).await
    }
}
