use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starhop_lib::{
    explore, load_catalog, Catalog, Navigator, SpatialIndex, SystemRecord, LY_IN_METERS,
};
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal_systems.json")
}

static FIXTURE: Lazy<Navigator> =
    Lazy::new(|| Navigator::new(load_catalog(&fixture_path()).expect("fixture loads")));

/// Roughly the size of a full cycle catalog, spread over a 1000 ly cube.
static DENSE: Lazy<Catalog> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let extent = 1000.0 * LY_IN_METERS;
    let records = (0..24_000)
        .map(|i| {
            SystemRecord::new(
                i,
                format!("S-{i}"),
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
            )
        })
        .collect::<Vec<_>>();
    Catalog::build(records).expect("generated catalog builds")
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let navigator = &*FIXTURE;

    c.bench_function("route_nod_d2nas", |b| {
        b.iter(|| {
            let route = navigator
                .calculate_route("Nod", "D:2NAS", 10.0)
                .expect("route exists");
            black_box(route.hop_count())
        });
    });

    let catalog = &*DENSE;
    c.bench_function("spatial_index_build_24k", |b| {
        b.iter(|| black_box(SpatialIndex::from_catalog(catalog).len()));
    });

    let index = SpatialIndex::from_catalog(catalog);
    c.bench_function("explore_24k_20ly", |b| {
        b.iter(|| {
            let reached = explore(catalog, &index, 0, 20.0 * LY_IN_METERS);
            black_box(reached.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
