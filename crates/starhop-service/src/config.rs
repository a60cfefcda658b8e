//! Service configuration read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use starhop_lib::dataset::{DATASET_FILENAME, DATA_PATH_ENV};
use starhop_lib::resolve_dataset_path;

/// Port used when `SERVICE_PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the per-query timeout in milliseconds.
pub const QUERY_TIMEOUT_ENV: &str = "STARHOP_QUERY_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Resolved dataset file.
    pub data_path: PathBuf,
    pub port: u16,
    /// Upper bound on a single route calculation. `None` waits indefinitely.
    pub query_timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// - `STARHOP_DATA_PATH`: dataset file or directory (default:
    ///   `SolarSystem_Cycle2.txt` in the working directory)
    /// - `SERVICE_PORT`: HTTP port (default: 8080)
    /// - `STARHOP_QUERY_TIMEOUT_MS`: per-query timeout; unset or `0` disables it
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let configured = lookup(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DATASET_FILENAME));
        let data_path = resolve_dataset_path(Some(&configured));

        let port = lookup("SERVICE_PORT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let query_timeout = lookup(QUERY_TIMEOUT_ENV)
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|&millis| millis > 0)
            .map(Duration::from_millis);

        Self {
            data_path,
            port,
            query_timeout,
        }
    }
}
