mod file_config;

pub use file_config::{BackendConfig, FileConfig};

use crate::server::{RequestsLoggingLevel, ServerConfig, DEFAULT_PROFILE_IMAGE};
use crate::store::{DataStore, InMemoryDataStore, SupabaseDataStore};
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub assets_dir: Option<PathBuf>,
    pub default_profile_image: Option<String>,
    pub backend_url: Option<String>,
    pub backend_api_key: Option<String>,
    pub backend_timeout_sec: u64,
    pub fixtures_file: Option<PathBuf>,
}

/// Where the site reads its content from.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendSettings {
    Supabase {
        url: String,
        api_key: String,
        timeout_sec: u64,
    },
    Fixtures {
        path: PathBuf,
    },
}

impl BackendSettings {
    pub fn open_store(&self) -> Result<Arc<dyn DataStore>> {
        match self {
            BackendSettings::Supabase {
                url,
                api_key,
                timeout_sec,
            } => {
                info!("Using hosted backend at {}", url);
                Ok(Arc::new(SupabaseDataStore::new(
                    url.clone(),
                    api_key.clone(),
                    *timeout_sec,
                )?))
            }
            BackendSettings::Fixtures { path } => {
                info!("Serving content from fixtures file {:?}", path);
                Ok(Arc::new(InMemoryDataStore::from_fixtures_file(
                    path, "/assets",
                )?))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub assets_dir: Option<PathBuf>,
    pub default_profile_image: String,
    pub backend: BackendSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| RequestsLoggingLevel::parse(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let assets_dir = file
            .assets_dir
            .map(PathBuf::from)
            .or_else(|| cli.assets_dir.clone());
        if let Some(dir) = &assets_dir {
            if !dir.is_dir() {
                bail!("Assets directory does not exist: {:?}", dir);
            }
        }

        let default_profile_image = file
            .default_profile_image
            .or_else(|| cli.default_profile_image.clone())
            .unwrap_or_else(|| DEFAULT_PROFILE_IMAGE.to_string());

        let backend_file = file.backend.unwrap_or_default();
        let backend_url = backend_file.url.or_else(|| cli.backend_url.clone());
        let fixtures_file = backend_file
            .fixtures_file
            .map(PathBuf::from)
            .or_else(|| cli.fixtures_file.clone());

        let backend = match (backend_url, fixtures_file) {
            (Some(url), _) => {
                let api_key = backend_file
                    .api_key
                    .or_else(|| cli.backend_api_key.clone())
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "backend api key must be specified via --backend-api-key or in config file"
                        )
                    })?;
                BackendSettings::Supabase {
                    url,
                    api_key,
                    timeout_sec: backend_file.timeout_sec.unwrap_or(cli.backend_timeout_sec),
                }
            }
            (None, Some(path)) => BackendSettings::Fixtures { path },
            (None, None) => bail!(
                "either a backend url (--backend-url) or a fixtures file (--fixtures-file) must be specified"
            ),
        };

        Ok(AppConfig {
            host,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            assets_dir,
            default_profile_image,
            backend,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            host: self.host.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            content_cache_age_sec: self.content_cache_age_sec,
            assets_dir: self.assets_dir.clone(),
            default_profile_image: self.default_profile_image.clone(),
        }
    }
}
