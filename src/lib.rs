//! Portfolio Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod pages;
pub mod portfolio;
pub mod render;
pub mod server;
pub mod store;

// Re-export commonly used types for convenience
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
pub use store::{DataStore, InMemoryDataStore, StoreError, SupabaseDataStore};
