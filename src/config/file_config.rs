use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub host: Option<String>,
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<String>,
    pub content_cache_age_sec: Option<usize>,
    pub assets_dir: Option<String>,
    pub default_profile_image: Option<String>,

    pub backend: Option<BackendConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct BackendConfig {
    /// Project URL of the hosted backend.
    pub url: Option<String>,
    /// Anon key of the project.
    pub api_key: Option<String>,
    pub timeout_sec: Option<u64>,
    /// JSON fixtures to serve instead of a remote backend.
    pub fixtures_file: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
