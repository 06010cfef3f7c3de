//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `build.rs` forwards `COLUMBUS_*` values from `.env`; this module turns them
//! into an [`AppConfig`] that the root component provides as context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://hms-columbus-vacation-backend-production.up.railway.app";

/// Number of hotels shown on the home page preview.
pub const HOME_PREVIEW_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    pub log_level: log::Level,
    pub home_preview_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            log_level: log::Level::Info,
            home_preview_limit: HOME_PREVIEW_LIMIT,
        }
    }
}

impl AppConfig {
    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("COLUMBUS_API_BASE_URL"), option_env!("COLUMBUS_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = base_url
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map_or(defaults.api_base_url, str::to_owned);
        let log_level = log_level
            .and_then(|raw| raw.trim().parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);
        Self { api_base_url, log_level, ..defaults }
    }

    /// Absolute URL for an API path such as `/hotels/all`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
