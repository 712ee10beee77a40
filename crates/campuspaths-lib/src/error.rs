use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Campus Paths library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when a CSV row is malformed or missing a required column.
    #[error("invalid campus data: {message}")]
    CampusDataValidation { message: String },

    /// Raised when two buildings share the same short name.
    #[error("duplicate building short name encountered: {name}")]
    DuplicateLocation { name: String },

    /// Raised when a walkway record carries a negative or non-numeric distance.
    #[error("walkway at row {row} has invalid distance {distance}")]
    InvalidDistance { row: u64, distance: f64 },

    /// Raised when an edge references a node that was never added to the graph.
    #[error("cannot add edge: {endpoint} node is not present in the graph")]
    InvalidEdge { endpoint: &'static str },

    /// Raised when an edge weight is negative or NaN.
    #[error("cannot add edge with invalid weight {weight}")]
    InvalidWeight { weight: f64 },

    /// Raised when a building short name could not be found in the campus map.
    #[error("Unknown location '{name}'{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no walkway sequence connects two known buildings.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
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
    fn unknown_location_without_suggestions() {
        let err = Error::UnknownLocation {
            name: "XX".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "Unknown location 'XX'");
    }

    #[test]
    fn unknown_location_lists_suggestions() {
        let err = Error::UnknownLocation {
            name: "CSE3".to_string(),
            suggestions: vec!["CSE".to_string(), "CSE2".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("Did you mean one of: 'CSE', 'CSE2'?"));
    }

    #[test]
    fn single_suggestion_is_phrased_singular() {
        let err = Error::UnknownLocation {
            name: "KN".to_string(),
            suggestions: vec!["KNE".to_string()],
        };
        assert!(err.to_string().ends_with("Did you mean 'KNE'?"));
    }
}
