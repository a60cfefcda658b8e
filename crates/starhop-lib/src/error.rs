use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::SystemId;

/// Convenient result alias for the starhop library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when the dataset contents do not match the expected layout.
    #[error("failed to parse dataset: {message}")]
    DatasetParse { message: String },

    /// Raised when two catalog records share the same system identifier.
    #[error("duplicate system id {id} in catalog")]
    DuplicateSystemId { id: SystemId },

    /// Raised when a system name could not be found in the catalog.
    #[error("unknown system name: {name}{}", format_suggestions(.suggestions))]
    UnknownSystem {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the destination is not reachable from the start.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when the jump range is not a positive, finite number.
    #[error("invalid jump range {value}; expected a positive number of light-years")]
    InvalidRange { value: f64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_system_without_suggestions() {
        let err = Error::UnknownSystem {
            name: "Nowhere".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown system name: Nowhere");
    }

    #[test]
    fn unknown_system_with_single_suggestion() {
        let err = Error::UnknownSystem {
            name: "Sool".to_string(),
            suggestions: vec!["Sol".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown system name: Sool. Did you mean 'Sol'?"
        );
    }

    #[test]
    fn unknown_system_with_many_suggestions() {
        let err = Error::UnknownSystem {
            name: "Alp".to_string(),
            suggestions: vec!["Alpha".to_string(), "Alpine".to_string()],
        };
        assert!(err
            .to_string()
            .ends_with("Did you mean one of: 'Alpha', 'Alpine'?"));
    }

    #[test]
    fn invalid_range_mentions_value() {
        let err = Error::InvalidRange { value: -3.0 };
        assert!(err.to_string().contains("-3"));
    }
}
