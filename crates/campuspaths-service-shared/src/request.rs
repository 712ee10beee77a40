//! Query parameters and validation for the route endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation hook run by handlers before touching the campus map.
pub trait Validate {
    /// Check the request, returning a 400 problem on failure.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// `?start=SHORT&end=SHORT` query shared by `/findPath`, `/directions` and
/// `/api/v1/route`.
///
/// Both fields are optional at the extractor level so a missing parameter is
/// reported as a problem document rather than a plain-text rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub end: Option<String>,
}

impl RouteQuery {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Validated start and end short names, surrounding whitespace removed.
    pub fn endpoints(&self, request_id: &str) -> Result<(&str, &str), Box<ProblemDetails>> {
        self.validate(request_id)?;
        match (self.start.as_deref(), self.end.as_deref()) {
            (Some(start), Some(end)) => Ok((start.trim(), end.trim())),
            _ => Err(Box::new(ProblemDetails::bad_request(
                "Start or end building is empty",
                request_id,
            ))),
        }
    }
}

impl Validate for RouteQuery {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        if is_blank(self.start.as_deref()) {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'start' parameter is required and cannot be empty",
                request_id,
            )));
        }

        if is_blank(self.end.as_deref()) {
            return Err(Box::new(ProblemDetails::bad_request(
                "The 'end' parameter is required and cannot be empty",
                request_id,
            )));
        }

        Ok(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).unwrap_or_default().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let query = RouteQuery::new("CSE", "KNE");
        assert!(query.validate("req").is_ok());
        assert_eq!(query.endpoints("req").unwrap(), ("CSE", "KNE"));
    }

    #[test]
    fn test_endpoints_are_trimmed() {
        let query = RouteQuery::new(" CSE", "KNE\t");
        assert_eq!(query.endpoints("req").unwrap(), ("CSE", "KNE"));
    }

    #[test]
    fn test_missing_start_is_rejected() {
        let query = RouteQuery {
            start: None,
            end: Some("KNE".to_string()),
        };
        let problem = query.validate("req-1").unwrap_err();
        assert_eq!(problem.status, 400);
        assert!(problem.detail.as_deref().unwrap().contains("'start'"));
    }

    #[test]
    fn test_blank_end_is_rejected() {
        let query = RouteQuery::new("CSE", "   ");
        let problem = query.endpoints("req-2").unwrap_err();
        assert!(problem.detail.as_deref().unwrap().contains("'end'"));
        assert_eq!(problem.instance.as_deref(), Some("req-2"));
    }

    #[test]
    fn test_query_deserializes_with_missing_fields() {
        let query: RouteQuery = serde_json::from_str("{}").unwrap();
        assert!(query.start.is_none());
        assert!(query.end.is_none());
    }
}
