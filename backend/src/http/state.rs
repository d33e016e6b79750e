//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DashboardSettings;
use crate::models::Dataset;

/// Shared application state passed to all handlers.
///
/// Both fields are immutable for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    /// Dataset snapshot loaded at startup
    pub dataset: Arc<Dataset>,
    /// View-model constants from the `[dashboard]` config section
    pub settings: Arc<DashboardSettings>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(dataset: Dataset, settings: DashboardSettings) -> Self {
        Self {
            dataset: Arc::new(dataset),
            settings: Arc::new(settings),
        }
    }
}
