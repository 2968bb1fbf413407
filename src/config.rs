//! Build-time configuration for the admin client.
//!
//! The browser bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled. Missing or malformed values fall
//! back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1/user";
pub const DEFAULT_IDENTITY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Base URL of the user API; endpoint paths are appended to it.
    pub api_base_url: String,
    /// Upper bound for a single identity check before it counts as failed.
    pub identity_timeout: Duration,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            identity_timeout: Duration::from_millis(DEFAULT_IDENTITY_TIMEOUT_MS),
        }
    }
}

impl PortalConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `PORTAL_API_URL`: user API base URL
    /// - `PORTAL_IDENTITY_TIMEOUT_MS`: identity check timeout, default 5000
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PORTAL_API_URL"), option_env!("PORTAL_IDENTITY_TIMEOUT_MS"))
    }

    pub(crate) fn from_values(api_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_IDENTITY_TIMEOUT_MS);

        Self { api_base_url, identity_timeout: Duration::from_millis(timeout_ms) }
    }
}
