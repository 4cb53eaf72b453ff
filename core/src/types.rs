//! Wire DTOs for the division API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the C ABI never couples to axum internals. `mode` stays a plain string:
//! the client passes it through and the server decides what it means.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MODE_BASIC: &str = "basic";
pub const MODE_GBDT: &str = "gbdt";

/// Mode sent when the caller leaves it empty.
pub const DEFAULT_MODE: &str = MODE_BASIC;

/// Request payload for `POST /divide`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRequest {
    pub names: Vec<String>,
    pub mode: String,
}

impl DivisionRequest {
    /// Build a request, substituting `DEFAULT_MODE` for an empty `mode`.
    pub fn new<S: AsRef<str>>(names: &[S], mode: &str) -> Self {
        let mode = if mode.is_empty() { DEFAULT_MODE } else { mode };
        Self {
            names: names.iter().map(|n| n.as_ref().to_string()).collect(),
            mode: mode.to_string(),
        }
    }
}

/// One divided name, positionally aligned with the request's `names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividedName {
    pub family: String,
    pub given: String,
    pub separator: String,
    pub score: f64,
    pub algorithm: String,
}

impl fmt::Display for DividedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DividedName(family='{}', given='{}', score={:.4}, algorithm='{}')",
            self.family, self.given, self.score, self.algorithm
        )
    }
}

/// Success body of `POST /divide`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionResponse {
    pub divided_names: Vec<DividedName>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub health: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mode_falls_back_to_basic() {
        let req = DivisionRequest::new(&["原敬"], "");
        assert_eq!(req.mode, "basic");
        assert_eq!(req.names, vec!["原敬".to_string()]);
    }

    #[test]
    fn explicit_mode_is_passed_through_untouched() {
        let req = DivisionRequest::new(&["原敬"], "experimental");
        assert_eq!(req.mode, "experimental");
    }

    #[test]
    fn request_serializes_names_and_mode() {
        let req = DivisionRequest::new(&["原敬", "菅義偉"], MODE_GBDT);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"names": ["原敬", "菅義偉"], "mode": "gbdt"}));
    }

    #[test]
    fn response_rejects_missing_field() {
        let result: Result<DivisionResponse, _> = serde_json::from_str(
            r#"{"divided_names":[{"family":"原","given":"敬","score":0.9,"algorithm":"basic"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn divided_name_display_rounds_score() {
        let name = DividedName {
            family: "原".to_string(),
            given: "敬".to_string(),
            separator: String::new(),
            score: 0.123456,
            algorithm: "basic".to_string(),
        };
        assert_eq!(
            name.to_string(),
            "DividedName(family='原', given='敬', score=0.1235, algorithm='basic')"
        );
    }
}
