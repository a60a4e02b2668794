use crate::config::{AnalysisConfig, Config};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub async fn get_analysis(&self) -> AnalysisConfig {
        self.config.read().await.analysis.clone()
    }
}
