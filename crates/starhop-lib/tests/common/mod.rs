#![allow(dead_code)]

use std::path::PathBuf;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starhop_lib::{load_catalog, Catalog, Navigator, SystemRecord, LY_IN_METERS};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal_systems.json")
}

pub fn fixture_navigator() -> Navigator {
    let catalog = load_catalog(&fixture_path()).expect("fixture loads");
    Navigator::new(catalog)
}

fn catalog_from_points(points: impl IntoIterator<Item = (f64, f64, f64)>) -> Catalog {
    let records = points
        .into_iter()
        .enumerate()
        .map(|(i, (x, y, z))| SystemRecord::new(1_000 + i as i64, format!("S-{i:04}"), x, y, z))
        .collect::<Vec<_>>();
    Catalog::build(records).expect("generated catalog builds")
}

/// Seeded uniform scatter of systems inside a cube of `extent` meters.
pub fn scattered_catalog(count: usize, extent: f64, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    catalog_from_points((0..count).map(|_| {
        (
            rng.gen_range(0.0..extent),
            rng.gen_range(0.0..extent),
            rng.gen_range(0.0..extent),
        )
    }))
}

/// Catalogs of up to `max_systems` systems inside a cube of `extent_ly`
/// light-years. Coordinates are whole light-years on a coarse grid, so
/// coincident systems and exact-range hops show up regularly.
pub fn catalog_strategy(max_systems: usize, extent_ly: u32) -> impl Strategy<Value = Catalog> {
    let axis = 0..=extent_ly;
    prop::collection::vec((axis.clone(), axis.clone(), axis), 1..=max_systems).prop_map(
        |points| {
            catalog_from_points(points.into_iter().map(|(x, y, z)| {
                (
                    f64::from(x) * LY_IN_METERS,
                    f64::from(y) * LY_IN_METERS,
                    f64::from(z) * LY_IN_METERS,
                )
            }))
        },
    )
}
