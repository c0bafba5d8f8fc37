use axum::extract::FromRef;

use crate::pages::SubmissionGate;
use crate::store::DataStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedDataStore = Arc<dyn DataStore>;
pub type GuardedSubmissionGate = Arc<SubmissionGate>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub store: GuardedDataStore,
    pub submission_gate: GuardedSubmissionGate,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, store: GuardedDataStore) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            store,
            submission_gate: Arc::new(SubmissionGate::new()),
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for GuardedDataStore {
    fn from_ref(input: &ServerState) -> Self {
        input.store.clone()
    }
}

impl FromRef<ServerState> for GuardedSubmissionGate {
    fn from_ref(input: &ServerState) -> Self {
        input.submission_gate.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
