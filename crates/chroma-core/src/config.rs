use chroma_analysis::ExtractParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub system: SystemConfig,
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SystemConfig {
    pub log_level: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub clusters: usize,
    pub seed: u64,
    pub max_iterations: usize,
}

impl AnalysisConfig {
    pub fn extract_params(&self) -> ExtractParams {
        ExtractParams {
            clusters: self.clusters,
            seed: self.seed,
            max_iters: self.max_iterations,
        }
    }
}

impl Config {
    // Load config from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    // Load default config
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_file("config/default.toml")
    }

    // Default config in memory if file doesn't exist
    pub fn default() -> Self {
        Config {
            system: SystemConfig {
                log_level: "info".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            analysis: AnalysisConfig {
                clusters: 5,
                seed: 42,
                max_iterations: 300,
            },
        }
    }
}
