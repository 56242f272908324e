//! Handlers for person records.
//!
//! Every handler is a single round trip to the injected [`PersonStore`]
//! (`state.store`). Failures propagate as [`AppError`] and are mapped to a
//! response once, in `AppError::into_response`.
//!
//! [`PersonStore`]: people_db::PersonStore

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use people_core::error::CoreError;
use people_core::search::PersonQuery;
use people_core::types::PersonId;
use people_db::models::person::{BatchCount, CreatePerson, SearchPeople, UpdatePerson};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Parse a path segment into a person ID.
fn parse_person_id(raw: &str) -> AppResult<PersonId> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid person id '{raw}'")))
}

/// GET /people
pub async fn list_people(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let people = state.store.list().await?;
    Ok(Json(people))
}

/// GET /people/{id}
///
/// Returns 404 if no person has this ID.
pub async fn get_person(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_person_id(&raw_id)?;
    let person = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Person",
                id: id.to_string(),
            })
        })?;

    Ok(Json(person))
}

/// POST /people
pub async fn create_person(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePerson>,
) -> AppResult<impl IntoResponse> {
    let person = state.store.create(&input).await?;

    tracing::info!(person_id = %person.id, "Person created");

    Ok(Json(person))
}

/// POST /people/batch/create
///
/// Inserts every record atomically and responds with the count only.
pub async fn create_people_batch(
    State(state): State<AppState>,
    AppJson(inputs): AppJson<Vec<CreatePerson>>,
) -> AppResult<impl IntoResponse> {
    if inputs.is_empty() {
        return Ok(Json(BatchCount { count: 0 }));
    }

    let count = state.store.create_many(&inputs).await?;

    tracing::info!(count, "Person batch created");

    Ok(Json(BatchCount { count }))
}

/// PATCH /people/{id}
///
/// Only fields present in the body are changed.
pub async fn update_person(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdatePerson>,
) -> AppResult<impl IntoResponse> {
    let id = parse_person_id(&raw_id)?;
    let person = state.store.update(id, &input).await?;

    tracing::info!(person_id = %id, "Person updated");

    Ok(Json(person))
}

/// DELETE /people/{id}
///
/// Responds with the record as it was before deletion.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_person_id(&raw_id)?;
    let person = state.store.delete(id).await?;

    tracing::info!(person_id = %id, "Person deleted");

    Ok(Json(person))
}

/// POST /people/search
///
/// Field names are checked against the allow-list before the store is
/// queried; unknown names are a 400.
pub async fn search_people(
    State(state): State<AppState>,
    AppJson(input): AppJson<SearchPeople>,
) -> AppResult<impl IntoResponse> {
    let query = PersonQuery::parse(
        input.property.as_deref(),
        input.query.as_deref(),
        input.sort_by.as_deref(),
        input.order.as_deref(),
    )?;

    let people = state.store.search(&query).await?;
    tracing::debug!(
        count = people.len(),
        filtered = query.filter.is_some(),
        sorted = query.sort.is_some(),
        "Person search",
    );

    Ok(Json(people))
}
