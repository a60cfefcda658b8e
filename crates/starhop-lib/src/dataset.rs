//! Loading the solar system catalog from its JSON dataset.
//!
//! The dataset is a JSON object keyed by system identifier whose values carry
//! the system id, name, and location:
//!
//! ```json
//! {
//!   "30000001": {
//!     "solarSystemId": 30000001,
//!     "solarSystemName": "A 2560",
//!     "location": { "x": -5.1e18, "y": -4.3e17, "z": 1.2e18 }
//!   }
//! }
//! ```
//!
//! Object keys are ignored, unknown fields are skipped, and file order
//! becomes catalog storage order. A top-level array of the same records is
//! accepted as well.

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::{Catalog, SystemId, SystemRecord};
use crate::error::{Error, Result};

/// Default filename of the catalog dataset.
pub const DATASET_FILENAME: &str = "SolarSystem_Cycle2.txt";

/// Environment variable overriding the dataset location.
pub const DATA_PATH_ENV: &str = "STARHOP_DATA_PATH";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSystem {
    solar_system_id: SystemId,
    solar_system_name: String,
    location: RawLocation,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    x: f64,
    y: f64,
    z: f64,
}

impl From<RawSystem> for SystemRecord {
    fn from(raw: RawSystem) -> Self {
        SystemRecord::new(
            raw.solar_system_id,
            raw.solar_system_name,
            raw.location.x,
            raw.location.y,
            raw.location.z,
        )
    }
}

/// Resolve the dataset path.
///
/// Precedence: the explicit path, then `STARHOP_DATA_PATH`, then
/// [`DATASET_FILENAME`] in the working directory. A directory is joined with
/// [`DATASET_FILENAME`].
pub fn resolve_dataset_path(explicit: Option<&Path>) -> PathBuf {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => env::var_os(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DATASET_FILENAME)),
    };

    if candidate.is_dir() {
        candidate.join(DATASET_FILENAME)
    } else {
        candidate
    }
}

/// Load the catalog from a dataset file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.is_file() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "loading catalog");
    let file = File::open(path)?;
    let catalog = read_catalog(BufReader::new(file))?;
    info!(
        path = %path.display(),
        system_count = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Read the catalog from any JSON reader.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let value: Value = serde_json::from_reader(reader)?;
    catalog_from_value(value)
}

/// Parse the catalog from an in-memory JSON document.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(json)?;
    catalog_from_value(value)
}

fn catalog_from_value(value: Value) -> Result<Catalog> {
    let entries: Vec<(String, Value)> = match value {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(position, item)| (format!("#{position}"), item))
            .collect(),
        other => {
            return Err(Error::DatasetParse {
                message: format!(
                    "expected an object or array of systems, found {}",
                    json_kind(&other)
                ),
            })
        }
    };

    let records = entries
        .into_iter()
        .map(|(key, entry)| {
            serde_json::from_value::<RawSystem>(entry)
                .map(SystemRecord::from)
                .map_err(|e| Error::DatasetParse {
                    message: format!("invalid system entry {key}: {e}"),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Catalog::build(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
