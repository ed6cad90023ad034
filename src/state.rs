// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{ChatCompletion, GroqClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub client: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(client: Arc<dyn ChatCompletion>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(GroqClient::from_config(config)))
    }
}
