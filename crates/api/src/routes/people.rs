//! Route definitions for person records.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Person routes mounted at `/people`.
///
/// ```text
/// GET    /               -> list_people
/// POST   /               -> create_person
/// POST   /batch/create   -> create_people_batch
/// POST   /search         -> search_people
/// GET    /{id}           -> get_person
/// PATCH  /{id}           -> update_person
/// DELETE /{id}           -> delete_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list_people).post(people::create_person))
        .route("/batch/create", post(people::create_people_batch))
        .route("/search", post(people::search_people))
        .route(
            "/{id}",
            get(people::get_person)
                .patch(people::update_person)
                .delete(people::delete_person),
        )
}
