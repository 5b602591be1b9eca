//! Application State
//!
//! Shared state accessible by all handlers, wrapped in `Arc` by the router.

use std::time::Instant;

use tokio::sync::RwLock;

use super::store::Store;
use crate::config::DevServerConfig;

pub struct AppState {
    /// Climate series, stories and signatures
    pub store: RwLock<Store>,
    pub config: DevServerConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Store, config: DevServerConfig) -> Self {
        Self {
            store: RwLock::new(store),
            config,
            start_time: Instant::now(),
        }
    }

    /// Seeded fixtures with the given config
    pub fn seeded(config: DevServerConfig) -> Self {
        Self::new(Store::seeded(), config)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
