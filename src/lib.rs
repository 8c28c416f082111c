pub mod config;
pub mod domain {
    pub mod analytics;
    pub mod sample;
}
pub mod http {
    pub mod extract;
    pub mod handlers {
        pub mod latency;
        pub mod ops;
    }
    pub mod routes;
}
pub mod telemetry {
    pub mod aggregator;
    pub mod dataset;
    pub mod stats;
    pub mod store;
}

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<telemetry::store::DatasetStore>,
}

impl AppState {
    pub fn new(store: telemetry::store::DatasetStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
