//! Shared application state for axum handlers.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use starhop_lib::{load_catalog, Navigator, Result};
use tracing::info;

/// Loaded navigator plus per-query settings.
///
/// Cheap to clone; the navigator is shared read-only between requests.
#[derive(Clone)]
pub struct AppState {
    navigator: Arc<Navigator>,
    query_timeout: Option<Duration>,
}

impl AppState {
    /// Load the catalog at `path` and build its spatial index.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading catalog");
        let catalog = load_catalog(path)?;
        Ok(Self::from_navigator(Navigator::new(catalog)))
    }

    pub fn from_navigator(navigator: Navigator) -> Self {
        Self {
            navigator: Arc::new(navigator),
            query_timeout: None,
        }
    }

    /// Bound each route calculation by `timeout`.
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Shared handle for moving the navigator onto a blocking worker.
    pub fn navigator_arc(&self) -> Arc<Navigator> {
        Arc::clone(&self.navigator)
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("system_count", &self.navigator.catalog().len())
            .field("query_timeout", &self.query_timeout)
            .finish()
    }
}
