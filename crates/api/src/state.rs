use std::sync::Arc;

use recbase_store::RecordStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The record store. Constructed at startup (or per test) and
    /// injected here; handlers never reach for a global instance.
    pub store: Arc<RecordStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
