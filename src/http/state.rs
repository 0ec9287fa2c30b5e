//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ScheduleRepository;
use crate::import::ScheduleImporter;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for store operations
    pub repository: Arc<dyn ScheduleRepository>,
    /// Import orchestrator with the built-in header table
    pub importer: Arc<ScheduleImporter>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self {
            repository,
            importer: Arc::new(ScheduleImporter::new()),
        }
    }
}
