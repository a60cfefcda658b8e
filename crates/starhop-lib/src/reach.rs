use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::catalog::{Catalog, SystemId};
use crate::spatial::SpatialIndex;

/// Parent pointers discovered by a breadth-first exploration.
///
/// The start maps to `None`; every other key maps to the system that first
/// discovered it. Hop depth from the start is tracked alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predecessors {
    parents: HashMap<SystemId, Option<SystemId>>,
    depths: HashMap<SystemId, usize>,
}

impl Predecessors {
    fn seeded(start: SystemId) -> Self {
        Self {
            parents: HashMap::from([(start, None)]),
            depths: HashMap::from([(start, 0)]),
        }
    }

    fn record(&mut self, node: SystemId, parent: SystemId) {
        let depth = self.depths.get(&parent).map_or(1, |depth| depth + 1);
        self.parents.insert(node, Some(parent));
        self.depths.insert(node, depth);
    }

    /// Returns true if `id` was reached.
    pub fn contains(&self, id: SystemId) -> bool {
        self.parents.contains_key(&id)
    }

    /// Parent of `id`: `None` if unreached, `Some(None)` for the start.
    pub fn parent(&self, id: SystemId) -> Option<Option<SystemId>> {
        self.parents.get(&id).copied()
    }

    /// Number of hops from the start at which `id` was discovered.
    pub fn depth(&self, id: SystemId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    /// Number of reached systems, the start included.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if nothing was reached (unknown start).
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Identifiers of every reached system, in no particular order.
    pub fn reached(&self) -> impl Iterator<Item = SystemId> + '_ {
        self.parents.keys().copied()
    }
}

/// Explore every system reachable from `start` through hops no longer than
/// `max_hop_distance` (meters).
///
/// Neighbours come from radius queries against `index`. Each system is
/// enqueued at most once, so the first parent recorded for a system lies on a
/// minimum-hop path from the start. An unknown start yields an empty map.
pub fn explore(
    catalog: &Catalog,
    index: &SpatialIndex,
    start: SystemId,
    max_hop_distance: f64,
) -> Predecessors {
    if catalog.index_of(start).is_none() {
        return Predecessors::default();
    }

    let mut predecessors = Predecessors::seeded(start);
    let mut queue = VecDeque::from([start]);
    let mut radius_queries = 0usize;

    while let Some(current) = queue.pop_front() {
        let Some(position) = catalog.position_of(current) else {
            continue;
        };

        radius_queries += 1;
        for neighbour_index in index.within_radius(position.to_array(), max_hop_distance) {
            let Some(neighbour) = catalog.system_at(neighbour_index).map(|system| system.id)
            else {
                continue;
            };
            if neighbour == current || predecessors.contains(neighbour) {
                continue;
            }

            predecessors.record(neighbour, current);
            queue.push_back(neighbour);
        }
    }

    debug!(
        start,
        max_hop_distance,
        reached = predecessors.len(),
        radius_queries,
        "explored reachable component"
    );

    predecessors
}
