use std::sync::Arc;
use std::time::Instant;

use version_rest_api_config::ServiceConfig;

use crate::handlers::common::ReleaseRecord;
use crate::routes::RouteRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    /// The single release served by this process. Immutable after startup.
    pub release: Arc<ReleaseRecord>,
    pub route_registry: RouteRegistry,
    pub started_at: Instant,
}

impl AppState {
    pub fn with_config(config: ServiceConfig) -> Self {
        let release = Arc::new(ReleaseRecord::from(&config.release));
        Self {
            config,
            release,
            route_registry: RouteRegistry::new(),
            started_at: Instant::now(),
        }
    }
}
