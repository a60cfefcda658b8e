//! Static KD-tree spatial index for radius queries over catalog positions.
//!
//! The index is built once from the catalog and answers "which systems lie
//! within `r` of point `p`" in sub-linear time on average. Results are
//! reported as storage indices, the same index space used by
//! [`Catalog`](crate::catalog::Catalog), so callers can map them back to
//! system identifiers.
//!
//! Radius checks are inclusive: a system exactly `r` away is returned. The
//! KD-tree is queried with a slightly padded squared radius and every
//! candidate is then confirmed against its exact `f64` distance, so the
//! boundary does not depend on the tree's internal comparison.
//!
//! # Example
//!
//! ```
//! use starhop_lib::{Catalog, SpatialIndex, SystemRecord};
//!
//! let catalog = Catalog::build(vec![
//!     SystemRecord::new(1, "Sol", 0.0, 0.0, 0.0),
//!     SystemRecord::new(2, "Alpha", 5.0, 0.0, 0.0),
//! ])
//! .unwrap();
//! let index = SpatialIndex::from_catalog(&catalog);
//!
//! let mut found = index.within_radius([0.0, 0.0, 0.0], 5.0);
//! found.sort_unstable();
//! assert_eq!(found, vec![0, 1]);
//! ```

use std::collections::HashMap;

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use tracing::info;

use crate::catalog::{Catalog, SystemPosition};

/// KD-tree bucket size (kiddo default).
const BUCKET_SIZE: usize = 32;

/// Relative slack applied to the squared radius before asking the tree.
const RADIUS_PADDING: f64 = 1e-9;

/// Storage indices sharing one exact position.
#[derive(Debug, Clone)]
struct PointGroup {
    position: SystemPosition,
    members: Vec<usize>,
}

/// Precomputed spatial index over catalog positions.
///
/// The tree holds one item per distinct position. Systems at identical
/// coordinates share that item, since a kiddo leaf cannot be split once it
/// is full of equal points.
pub struct SpatialIndex {
    /// KD-tree keyed by coordinates in meters. Items index into `groups`.
    tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32>,
    groups: Vec<PointGroup>,
    /// Positions in storage order.
    positions: Vec<SystemPosition>,
}

impl SpatialIndex {
    /// Build an index over positions given in storage order.
    pub fn build(positions: &[SystemPosition]) -> Self {
        let mut slots: HashMap<[u64; 3], usize> = HashMap::with_capacity(positions.len());
        let mut groups: Vec<PointGroup> = Vec::new();
        for (index, position) in positions.iter().enumerate() {
            let slot = *slots.entry(point_key(position)).or_insert_with(|| {
                groups.push(PointGroup {
                    position: *position,
                    members: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].members.push(index);
        }

        let mut tree: KdTree<f64, usize, 3, BUCKET_SIZE, u32> = KdTree::new();
        for (slot, group) in groups.iter().enumerate() {
            tree.add(&group.position.to_array(), slot);
        }

        info!(
            node_count = positions.len(),
            distinct_points = groups.len(),
            "built spatial index"
        );

        Self {
            tree,
            groups,
            positions: positions.to_vec(),
        }
    }

    /// Build an index over every system in the catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::build(&catalog.positions())
    }

    /// Number of indexed positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position stored at a storage index.
    pub fn position(&self, index: usize) -> Option<SystemPosition> {
        self.positions.get(index).copied()
    }

    /// Storage indices of all positions within `radius` of `point`.
    ///
    /// The point's own index is included when it is indexed. Order is
    /// unspecified.
    pub fn within_radius(&self, point: [f64; 3], radius: f64) -> Vec<usize> {
        self.candidates(point, radius)
            .map(|(index, _)| index)
            .collect()
    }

    /// Like [`within_radius`](Self::within_radius) but with distances,
    /// nearest first.
    pub fn within_radius_sorted(&self, point: [f64; 3], radius: f64) -> Vec<(usize, f64)> {
        let mut neighbours: Vec<(usize, f64)> = self.candidates(point, radius).collect();
        neighbours.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        neighbours
    }

    fn candidates(&self, point: [f64; 3], radius: f64) -> impl Iterator<Item = (usize, f64)> + '_ {
        let valid = radius >= 0.0 && !self.positions.is_empty();
        let origin = SystemPosition::new(point[0], point[1], point[2]);

        let found = if valid {
            let padded = radius * radius * (1.0 + RADIUS_PADDING) + f64::EPSILON;
            self.tree.within::<SquaredEuclidean>(&point, padded)
        } else {
            Vec::new()
        };

        found.into_iter().flat_map(move |neighbour| {
            let group = &self.groups[neighbour.item];
            let distance = group.position.distance_to(&origin);
            let members: &[usize] = if distance <= radius {
                &group.members
            } else {
                &[]
            };
            members.iter().map(move |&index| (index, distance))
        })
    }
}

/// Exact bit pattern of a position, with `-0.0` folded into `0.0`.
fn point_key(position: &SystemPosition) -> [u64; 3] {
    [position.x, position.y, position.z].map(|v| (v + 0.0).to_bits())
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("node_count", &self.positions.len())
            .finish()
    }
}
