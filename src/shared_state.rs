use std::sync::Arc;

use crate::config::Config;

/// State shared by all handlers. Configuration is read once at startup and
/// never mutated, so every request sees the same tariff and policy.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
