use std::path::PathBuf;

use super::RequestsLoggingLevel;

/// Public path of the bundled profile photo, served from the assets dir.
pub const DEFAULT_PROFILE_IMAGE: &str = "/assets/profile-photo.svg";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
    /// max-age of the JSON API responses.
    pub content_cache_age_sec: usize,
    /// Directory served under `/assets`.
    pub assets_dir: Option<PathBuf>,
    /// Shown on the home page when no profile picture can be listed.
    pub default_profile_image: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: "127.0.0.1".to_string(),
            port: 3001,
            metrics_port: 9091,
            content_cache_age_sec: 60,
            assets_dir: None,
            default_profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
        }
    }
}
