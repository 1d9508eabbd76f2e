//! Application state and shared resources.

use std::path::PathBuf;
use std::sync::atomic::AtomicU64;

use reanalysis::DataStore;

/// Request counters exposed on /metrics.
#[derive(Debug, Default)]
pub struct Metrics {
    pub charts_rendered: AtomicU64,
    pub client_errors: AtomicU64,
    pub server_errors: AtomicU64,
}

/// Shared application state.
///
/// Holds only immutable configuration; every request loads its own data.
pub struct AppState {
    pub data: DataStore,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data: DataStore::new(data_root),
            metrics: Metrics::default(),
        }
    }
}
