pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod models;
pub mod search;
pub mod trending;

use std::sync::Arc;
use config::Config;
use fetcher::Fetcher;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let fetcher = Fetcher::new(config.fetch_timeout)?;
        Ok(AppState {
            config: Arc::new(config),
            fetcher,
        })
    }
}
