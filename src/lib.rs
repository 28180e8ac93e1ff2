pub mod api;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod session;
pub mod validator;
pub mod verdict;

use std::sync::Arc;
use client::CheckClient;
use config::Config;

/// Shared state for one running front-end.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: CheckClient,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let client = CheckClient::new(&config)?;
        Ok(AppState {
            config: Arc::new(config),
            client,
        })
    }
}
