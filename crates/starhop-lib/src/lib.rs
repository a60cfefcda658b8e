//! starhop library entry points.
//!
//! This crate loads the solar system catalog into memory, builds a KD-tree
//! spatial index over system positions, and answers minimum-hop route queries
//! where every hop stays within a maximum jump range. Higher-level consumers
//! (CLI, HTTP service) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod navigator;
pub mod output;
pub mod path;
pub mod reach;
pub mod spatial;

pub use catalog::{Catalog, System, SystemId, SystemPosition, SystemRecord};
pub use dataset::{load_catalog, parse_catalog, read_catalog, resolve_dataset_path};
pub use error::{Error, Result};
pub use navigator::{
    light_years_to_meters, meters_to_light_years, Navigator, Neighbour, Route,
    DEFAULT_JUMP_RANGE_LY, LY_IN_METERS,
};
pub use output::{RouteOutcome, RouteSummary};
pub use path::reconstruct_path;
pub use reach::{explore, Predecessors};
pub use spatial::SpatialIndex;
