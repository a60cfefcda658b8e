//! Query parameters for `GET /route`.

use serde::Deserialize;
use starhop_lib::DEFAULT_JUMP_RANGE_LY;

use crate::error::ApiError;

/// Raw query string parameters.
///
/// Every field is optional at the extractor level so that missing values
/// are reported in the service's own error shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteQuery {
    pub start: Option<String>,
    pub destination: Option<String>,
    pub jump_range: Option<String>,
}

/// A route query that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRouteQuery {
    pub start: String,
    pub destination: String,
    pub jump_range_ly: f64,
}

impl RouteQuery {
    /// Check presence of both names and parse the jump range.
    ///
    /// Missing or blank names fail before the jump range is looked at. An
    /// absent jump range defaults to 100 ly; a present one must parse to a
    /// finite positive number.
    pub fn validate(&self) -> Result<ValidRouteQuery, ApiError> {
        let start = non_blank(self.start.as_deref()).ok_or_else(ApiError::missing_parameters)?;
        let destination =
            non_blank(self.destination.as_deref()).ok_or_else(ApiError::missing_parameters)?;

        let jump_range_ly = match self.jump_range.as_deref() {
            None => DEFAULT_JUMP_RANGE_LY,
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value > 0.0)
                .ok_or_else(ApiError::invalid_jump_range)?,
        };

        Ok(ValidRouteQuery {
            start: start.to_string(),
            destination: destination.to_string(),
            jump_range_ly,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
