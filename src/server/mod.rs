mod assets;
pub mod config;
mod http_layers;
pub mod metrics;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_PROFILE_IMAGE};
pub use http_layers::*;
pub use server::{make_app, run_server};
