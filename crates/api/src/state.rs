use std::sync::Arc;

use marquee_core::store::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Movie storage backend, created once at startup.
    pub store: Arc<dyn MovieStore>,
}
