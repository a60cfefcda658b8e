use serde::{Deserialize, Serialize};

use crate::catalog::SystemId;
use crate::error::{Error, Result};
use crate::navigator::Route;

/// Error message returned when a start or destination name is unknown.
pub const SYSTEM_NOT_FOUND: &str = "System not found";

/// Error message returned when the destination is unreachable.
pub const NO_ROUTE_FOUND: &str = "No route found";

/// Error message returned when the jump range is not a positive number.
pub const INVALID_JUMP_RANGE: &str = "Invalid jump range";

/// Wire shape handed to request layers: either a route or an error message.
///
/// Serialises as `{"route": [...]}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    Route(Vec<String>),
    Error(String),
}

impl RouteOutcome {
    /// Map a library error onto the public error message.
    ///
    /// Returns `None` for errors that have no public shape (dataset and IO
    /// failures) so callers can treat them as internal faults.
    pub fn from_error(error: &Error) -> Option<Self> {
        let message = match error {
            Error::UnknownSystem { .. } => SYSTEM_NOT_FOUND,
            Error::RouteNotFound { .. } => NO_ROUTE_FOUND,
            Error::InvalidRange { .. } => INVALID_JUMP_RANGE,
            _ => return None,
        };
        Some(Self::Error(message.to_string()))
    }

    /// Convert a route calculation result, passing internal errors through.
    pub fn from_result(result: Result<Route>) -> Result<Self> {
        match result {
            Ok(route) => Ok(route.into()),
            Err(error) => Self::from_error(&error).ok_or(error),
        }
    }
}

impl From<Route> for RouteOutcome {
    fn from(route: Route) -> Self {
        Self::Route(route.names)
    }
}

/// Step taken during traversal of a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: SystemId,
    pub name: String,
}

/// Structured representation of a route that CLI consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub hops: usize,
    pub jump_range_ly: f64,
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    pub fn from_route(route: &Route) -> Self {
        let steps: Vec<RouteStep> = route
            .systems
            .iter()
            .zip(&route.names)
            .enumerate()
            .map(|(index, (id, name))| RouteStep {
                index,
                id: *id,
                name: name.clone(),
            })
            .collect();

        Self {
            hops: route.hop_count(),
            jump_range_ly: route.jump_range_ly,
            start: steps.first().map(|s| s.name.clone()).unwrap_or_default(),
            goal: steps.last().map(|s| s.name.clone()).unwrap_or_default(),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> Route {
        Route {
            start: 1,
            goal: 3,
            jump_range_ly: 1.5,
            systems: vec![1, 2, 3],
            names: vec!["Sol".into(), "Alpha".into(), "Beta".into()],
        }
    }

    #[test]
    fn route_outcome_serialises_as_route_object() {
        let outcome = RouteOutcome::from(sample_route());
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"route":["Sol","Alpha","Beta"]}"#);
    }

    #[test]
    fn error_outcomes_use_public_messages() {
        let unknown = RouteOutcome::from_result(Err(Error::UnknownSystem {
            name: "X".into(),
            suggestions: vec![],
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_string(&unknown).unwrap(),
            r#"{"error":"System not found"}"#
        );

        let unreachable = RouteOutcome::from_result(Err(Error::RouteNotFound {
            start: "A".into(),
            goal: "B".into(),
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_string(&unreachable).unwrap(),
            r#"{"error":"No route found"}"#
        );
    }

    #[test]
    fn internal_errors_have_no_public_shape() {
        let result = RouteOutcome::from_result(Err(Error::DuplicateSystemId { id: 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn summary_numbers_each_step() {
        let summary = RouteSummary::from_route(&sample_route());
        assert_eq!(summary.hops, 2);
        assert_eq!(summary.start, "Sol");
        assert_eq!(summary.goal, "Beta");
        let names: Vec<&str> = summary.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Sol", "Alpha", "Beta"]);
        assert_eq!(summary.steps[1].index, 1);
        assert_eq!(summary.steps[1].id, 2);
    }
}
