use anyhow::{Context, Result};
use clap::Parser;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_server::config::{AppConfig, CliConfig, FileConfig};
use portfolio_server::server::metrics::init_metrics;
use portfolio_server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values found there override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to bind both servers to.
    #[clap(long, default_value = "127.0.0.1")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// max-age in seconds of the JSON API responses.
    #[clap(long, default_value_t = 60)]
    pub content_cache_age_sec: usize,

    /// Directory statically served under /assets.
    #[clap(long, value_parser = parse_path)]
    pub assets_dir: Option<PathBuf>,

    /// Project URL of the hosted backend, e.g. https://xyz.supabase.co
    #[clap(long)]
    pub backend_url: Option<String>,

    /// Anon key sent with every backend request.
    #[clap(long, env = "PORTFOLIO_BACKEND_API_KEY", hide_env_values = true)]
    pub backend_api_key: Option<String>,

    /// Timeout in seconds for backend requests.
    #[clap(long, default_value_t = 10)]
    pub backend_timeout_sec: u64,

    /// JSON file with collections and bucket listings, served instead of a backend.
    #[clap(long, value_parser = parse_path)]
    pub fixtures_file: Option<PathBuf>,

    /// Image shown on the home page when no profile picture is available.
    #[clap(long)]
    pub default_profile_image: Option<String>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            host: self.host.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            content_cache_age_sec: self.content_cache_age_sec,
            assets_dir: self.assets_dir.clone(),
            default_profile_image: self.default_profile_image.clone(),
            backend_url: self.backend_url.clone(),
            backend_api_key: self.backend_api_key.clone(),
            backend_timeout_sec: self.backend_timeout_sec,
            fixtures_file: self.fixtures_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Initializing metrics...");
    init_metrics();

    let store = app_config.backend.open_store()?;

    info!(
        "Starting portfolio server on {}:{} (requests logging: {})",
        app_config.host, app_config.port, app_config.logging_level
    );
    run_server(app_config.server_config(), store).await
}
