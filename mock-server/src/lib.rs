//! Stand-in for the name division API.
//!
//! Speaks the same wire contract as the real service (`POST /divide`,
//! `GET /health`) but divides names with a fixed positional rule instead of
//! a trained model, so tests can predict every answer.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const MAX_NAMES: usize = 1000;
pub const SEPARATOR: &str = " ";

const MODES: [&str; 2] = ["basic", "gbdt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub health: String,
}

#[derive(Debug, Deserialize)]
pub struct DivisionRequest {
    pub names: Vec<String>,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "basic".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionResult {
    pub divided_names: Vec<DividedName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividedName {
    pub family: String,
    pub given: String,
    pub separator: String,
    pub score: f64,
    pub algorithm: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/divide", post(divide))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        health: "OK".to_string(),
    })
}

async fn divide(
    Json(input): Json<DivisionRequest>,
) -> Result<Json<DivisionResult>, (StatusCode, Json<String>)> {
    validate(&input).map_err(|msg| {
        tracing::warn!(mode = %input.mode, count = input.names.len(), "rejected division request: {msg}");
        (StatusCode::UNPROCESSABLE_ENTITY, Json(msg.to_string()))
    })?;
    tracing::info!(mode = %input.mode, count = input.names.len(), "dividing names");
    let divided_names = input
        .names
        .iter()
        .map(|name| divide_name(name, &input.mode))
        .collect();
    Ok(Json(DivisionResult { divided_names }))
}

fn validate(input: &DivisionRequest) -> Result<(), &'static str> {
    if !MODES.contains(&input.mode.as_str()) {
        return Err("Mode must be 'basic' or 'gbdt'.");
    }
    if input.names.len() > MAX_NAMES {
        return Err("You can only divide up to 1000 names at a time.");
    }
    Ok(())
}

/// Split on an explicit separator when present; otherwise the family name
/// takes one character for names of up to three, and leaves two characters
/// of given name for anything longer.
pub fn divide_name(name: &str, algorithm: &str) -> DividedName {
    if let Some((family, given)) = name.split_once(SEPARATOR) {
        return DividedName {
            family: family.to_string(),
            given: given.to_string(),
            separator: SEPARATOR.to_string(),
            score: 1.0,
            algorithm: algorithm.to_string(),
        };
    }

    let chars: Vec<char> = name.chars().collect();
    let (family_len, score) = match chars.len() {
        0 | 1 => (chars.len(), 0.0),
        2 | 3 => (1, 0.5),
        n => (n - 2, 0.5),
    };
    DividedName {
        family: chars[..family_len].iter().collect(),
        given: chars[family_len..].iter().collect(),
        separator: String::new(),
        score,
        algorithm: algorithm.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(name: &str) -> (String, String) {
        let d = divide_name(name, "basic");
        (d.family, d.given)
    }

    #[test]
    fn divides_by_length() {
        assert_eq!(split("原敬"), ("原".to_string(), "敬".to_string()));
        assert_eq!(split("菅義偉"), ("菅".to_string(), "義偉".to_string()));
        assert_eq!(split("安倍晋三"), ("安倍".to_string(), "晋三".to_string()));
        assert_eq!(split("中曽根康弘"), ("中曽根".to_string(), "康弘".to_string()));
    }

    #[test]
    fn explicit_separator_wins() {
        let d = divide_name("小泉 純一郎", "gbdt");
        assert_eq!(d.family, "小泉");
        assert_eq!(d.given, "純一郎");
        assert_eq!(d.separator, " ");
        assert_eq!(d.score, 1.0);
        assert_eq!(d.algorithm, "gbdt");
    }

    #[test]
    fn degenerate_names_do_not_panic() {
        let d = divide_name("", "basic");
        assert_eq!((d.family.as_str(), d.given.as_str(), d.score), ("", "", 0.0));
        let d = divide_name("原", "basic");
        assert_eq!((d.family.as_str(), d.given.as_str(), d.score), ("原", "", 0.0));
    }

    #[test]
    fn request_mode_defaults_to_basic() {
        let input: DivisionRequest = serde_json::from_str(r#"{"names":["原敬"]}"#).unwrap();
        assert_eq!(input.mode, "basic");
    }

    #[test]
    fn request_rejects_missing_names() {
        let result: Result<DivisionRequest, _> = serde_json::from_str(r#"{"mode":"basic"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_unknown_mode_and_oversized_batches() {
        let bad_mode = DivisionRequest {
            names: vec!["原敬".to_string()],
            mode: "neural".to_string(),
        };
        assert!(validate(&bad_mode).is_err());

        let too_many = DivisionRequest {
            names: vec!["原敬".to_string(); MAX_NAMES + 1],
            mode: "basic".to_string(),
        };
        assert!(validate(&too_many).is_err());

        let at_limit = DivisionRequest {
            names: vec!["原敬".to_string(); MAX_NAMES],
            mode: "gbdt".to_string(),
        };
        assert!(validate(&at_limit).is_ok());
    }
}
