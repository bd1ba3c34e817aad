use std::sync::Arc;

use crate::services::{LoadOrchestrator, ResourceFetcher};

/// Shared application state: the single page session served by this process
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: LoadOrchestrator,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self {
            orchestrator: LoadOrchestrator::new(fetcher),
        }
    }
}
