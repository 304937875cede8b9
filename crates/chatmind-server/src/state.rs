//! Application State

use std::sync::Arc;

use chatmind_core::LandingService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Landing content and contact handling
    pub service: Arc<LandingService>,
}

impl AppState {
    pub fn new(service: LandingService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
