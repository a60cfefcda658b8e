//! Query orchestration over a loaded catalog.
//!
//! A [`Navigator`] owns the catalog and the spatial index built from it. Both
//! are immutable once constructed, so a single navigator can serve any number
//! of concurrent queries by shared reference; each query allocates its own
//! exploration state.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, System, SystemId};
use crate::error::{Error, Result};
use crate::path::reconstruct_path;
use crate::reach::{explore, Predecessors};
use crate::spatial::SpatialIndex;

/// Meters in one light-year, the unit conversion for catalog coordinates.
pub const LY_IN_METERS: f64 = 9.461e15;

/// Jump range used when a caller does not supply one.
pub const DEFAULT_JUMP_RANGE_LY: f64 = 100.0;

/// Number of name suggestions attached to unknown-system errors.
const SUGGESTION_LIMIT: usize = 3;

/// Convert a distance in light-years to catalog meters.
pub fn light_years_to_meters(light_years: f64) -> f64 {
    light_years * LY_IN_METERS
}

/// Convert a distance in catalog meters to light-years.
pub fn meters_to_light_years(meters: f64) -> f64 {
    meters / LY_IN_METERS
}

/// Minimum-hop route between two systems.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub start: SystemId,
    pub goal: SystemId,
    pub jump_range_ly: f64,
    /// System identifiers from start to goal inclusive.
    pub systems: Vec<SystemId>,
    /// Display names, aligned with `systems`.
    pub names: Vec<String>,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.systems.len().saturating_sub(1)
    }
}

/// A system found by a radius search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbour {
    pub id: SystemId,
    pub name: String,
    pub distance_ly: f64,
}

/// Catalog plus spatial index, built once and queried many times.
pub struct Navigator {
    catalog: Catalog,
    index: SpatialIndex,
}

impl Navigator {
    /// Build the spatial index over `catalog` and take ownership of both.
    pub fn new(catalog: Catalog) -> Self {
        let index = SpatialIndex::from_catalog(&catalog);
        Self { catalog, index }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a system by name, attaching suggestions when it is unknown.
    pub fn resolve(&self, name: &str) -> Result<&System> {
        self.catalog
            .lookup_by_name(name)
            .ok_or_else(|| Error::UnknownSystem {
                name: name.to_string(),
                suggestions: self.catalog.fuzzy_matches(name, SUGGESTION_LIMIT),
            })
    }

    /// Compute a minimum-hop route where no hop exceeds `jump_range_ly`.
    ///
    /// Fails with [`Error::InvalidRange`] for a non-positive or non-finite
    /// range, [`Error::UnknownSystem`] when either name is missing from the
    /// catalog, and [`Error::RouteNotFound`] when the goal lies outside the
    /// start's reachable component.
    pub fn calculate_route(&self, start: &str, goal: &str, jump_range_ly: f64) -> Result<Route> {
        validate_range(jump_range_ly)?;

        let start_system = self.resolve(start)?;
        let goal_system = self.resolve(goal)?;

        let systems = if start_system.id == goal_system.id {
            vec![start_system.id]
        } else {
            let max_hop = light_years_to_meters(jump_range_ly);
            let predecessors = explore(&self.catalog, &self.index, start_system.id, max_hop);
            reconstruct_path(&predecessors, start_system.id, goal_system.id).ok_or_else(
                || Error::RouteNotFound {
                    start: start.to_string(),
                    goal: goal.to_string(),
                },
            )?
        };

        let names = systems
            .iter()
            .filter_map(|&id| self.catalog.system_name(id).map(str::to_string))
            .collect();

        debug!(
            start,
            goal,
            jump_range_ly,
            hops = systems.len().saturating_sub(1),
            "route calculated"
        );

        Ok(Route {
            start: start_system.id,
            goal: goal_system.id,
            jump_range_ly,
            systems,
            names,
        })
    }

    /// Explore the reachable component of a named system.
    pub fn reachable_from(&self, name: &str, jump_range_ly: f64) -> Result<Predecessors> {
        validate_range(jump_range_ly)?;
        let system = self.resolve(name)?;
        Ok(explore(
            &self.catalog,
            &self.index,
            system.id,
            light_years_to_meters(jump_range_ly),
        ))
    }

    /// Systems within `radius_ly` of a named system, nearest first, excluding
    /// the system itself.
    pub fn systems_within(&self, name: &str, radius_ly: f64) -> Result<Vec<Neighbour>> {
        validate_range(radius_ly)?;
        let origin = self.resolve(name)?;

        let neighbours = self
            .index
            .within_radius_sorted(origin.position.to_array(), light_years_to_meters(radius_ly))
            .into_iter()
            .filter_map(|(index, distance)| {
                let system = self.catalog.system_at(index)?;
                (system.id != origin.id).then(|| Neighbour {
                    id: system.id,
                    name: system.name.clone(),
                    distance_ly: meters_to_light_years(distance),
                })
            })
            .collect();

        Ok(neighbours)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("system_count", &self.catalog.len())
            .field("index", &self.index)
            .finish()
    }
}

fn validate_range(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SystemRecord;

    fn navigator() -> Navigator {
        let catalog = Catalog::build(vec![
            SystemRecord::new(1, "Sol", 0.0, 0.0, 0.0),
            SystemRecord::new(2, "Alpha", 1.0e16, 0.0, 0.0),
            SystemRecord::new(3, "Beta", 2.0e16, 0.0, 0.0),
            SystemRecord::new(4, "Gamma", 1.0e19, 0.0, 0.0),
        ])
        .expect("catalog builds");
        Navigator::new(catalog)
    }

    #[test]
    fn two_hop_route_through_alpha() {
        let route = navigator()
            .calculate_route("Sol", "Beta", 1.5)
            .expect("route exists");
        assert_eq!(route.names, vec!["Sol", "Alpha", "Beta"]);
        assert_eq!(route.systems, vec![1, 2, 3]);
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn wide_range_hops_directly() {
        let route = navigator()
            .calculate_route("Sol", "Beta", 2.5)
            .expect("route exists");
        assert_eq!(route.names, vec!["Sol", "Beta"]);
    }

    #[test]
    fn same_start_and_goal() {
        let route = navigator()
            .calculate_route("Gamma", "Gamma", 0.1)
            .expect("trivial route");
        assert_eq!(route.names, vec!["Gamma"]);
        assert_eq!(route.hop_count(), 0);
    }

    #[test]
    fn unknown_destination() {
        let err = navigator()
            .calculate_route("Sol", "Nonexistent", 5.0)
            .expect_err("unknown system");
        assert!(matches!(err, Error::UnknownSystem { ref name, .. } if name == "Nonexistent"));
    }

    #[test]
    fn unknown_start_is_reported_first() {
        let err = navigator()
            .calculate_route("Nowhere", "Nonexistent", 5.0)
            .expect_err("unknown system");
        assert!(matches!(err, Error::UnknownSystem { ref name, .. } if name == "Nowhere"));
    }

    #[test]
    fn isolated_destination() {
        let err = navigator()
            .calculate_route("Sol", "Gamma", 5.0)
            .expect_err("unreachable");
        assert!(matches!(err, Error::RouteNotFound { .. }));
    }

    #[test]
    fn rejects_invalid_ranges() {
        let nav = navigator();
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = nav
                .calculate_route("Sol", "Beta", value)
                .expect_err("invalid range");
            assert!(matches!(err, Error::InvalidRange { .. }));
        }
    }

    #[test]
    fn systems_within_excludes_origin() {
        let neighbours = navigator()
            .systems_within("Sol", 2.5)
            .expect("query succeeds");
        let names: Vec<&str> = neighbours.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert!((neighbours[0].distance_ly - 1.0e16 / LY_IN_METERS).abs() < 1e-9);
    }

    #[test]
    fn reachable_from_counts_component() {
        let nav = navigator();
        let reached = nav.reachable_from("Sol", 1.5).expect("query succeeds");
        assert_eq!(reached.len(), 3);
        assert!(!reached.contains(4));
    }

    #[test]
    fn conversion_round_trips() {
        assert_eq!(light_years_to_meters(1.0), LY_IN_METERS);
        assert_eq!(meters_to_light_years(LY_IN_METERS * 2.0), 2.0);
    }
}
