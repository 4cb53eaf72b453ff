//! Client configuration.
//!
//! Everything is optional. An absent or blank base URL resolves to
//! `DEFAULT_BASE_URL`; an absent timeout means calls may block for as long
//! as the server takes.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const ENV_BASE_URL: &str = "NAMEDIVIDER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "NAMEDIVIDER_TIMEOUT_SECS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    /// Bound on a whole call: connect, send, and read.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `NAMEDIVIDER_BASE_URL` and `NAMEDIVIDER_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty());
        let timeout = lookup(ENV_TIMEOUT_SECS).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "ignoring invalid {ENV_TIMEOUT_SECS}");
                None
            }
        });
        Self { base_url, timeout }
    }

    /// Base URL with the default applied and trailing slashes removed.
    pub fn resolved_base_url(&self) -> String {
        let url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_base_url_resolves_to_default() {
        assert_eq!(ClientConfig::default().resolved_base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            ClientConfig::default().with_base_url("  ").resolved_base_url(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::default().with_base_url("http://names.internal:9000/");
        assert_eq!(config.resolved_base_url(), "http://names.internal:9000");
    }

    #[test]
    fn lookup_reads_url_and_timeout() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENV_BASE_URL => Some("http://10.0.0.5:8000".to_string()),
            ENV_TIMEOUT_SECS => Some("15".to_string()),
            _ => None,
        });
        assert_eq!(config.base_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn lookup_ignores_unparsable_timeout() {
        let config = ClientConfig::from_lookup(|key| match key {
            ENV_TIMEOUT_SECS => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, ClientConfig::default());
    }
}
