use std::sync::Arc;

use people_db::PersonStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Person storage, constructed once at startup.
    pub store: Arc<dyn PersonStore>,
}
