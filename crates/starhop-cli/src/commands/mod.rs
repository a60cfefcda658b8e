// Handlers for CLI subcommands. main.rs parses arguments and dispatches here.

pub mod neighbours;
pub mod reach;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use starhop_cli::output::OutputFormat;
use starhop_cli::terminal::ColorPalette;
use starhop_lib::{load_catalog, resolve_dataset_path, Navigator};

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub data: Option<PathBuf>,
    pub format: OutputFormat,
}

impl GlobalOptions {
    /// Load the dataset and build the spatial index.
    pub fn navigator(&self) -> Result<Navigator> {
        let path = resolve_dataset_path(self.data.as_deref());
        let catalog = load_catalog(&path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?;
        info!(path = %path.display(), systems = catalog.len(), "dataset loaded");
        Ok(Navigator::new(catalog))
    }

    pub fn palette(&self) -> ColorPalette {
        match self.format {
            OutputFormat::Text => ColorPalette::detect(),
            OutputFormat::Basic | OutputFormat::Json => ColorPalette::plain(),
        }
    }
}
