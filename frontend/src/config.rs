use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Settings baked in at build time (`BUDGET_API_URL`, `BUDGET_LOG_LEVEL`,
/// `BUDGET_REMOTE_LOGS`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Forward warnings and errors to the backend log collector
    pub remote_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            remote_logging: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            option_env!("BUDGET_API_URL"),
            option_env!("BUDGET_LOG_LEVEL"),
            option_env!("BUDGET_REMOTE_LOGS"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        log_level: Option<&str>,
        remote_logs: Option<&str>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    bail!("BUDGET_API_URL must be an http(s) URL, got {:?}", url);
                }
                url.trim_end_matches('/').to_string()
            }
            None => defaults.api_base_url,
        };

        let log_level = match log_level.map(str::trim).filter(|level| !level.is_empty()) {
            Some(level) => LevelFilter::from_str(level)
                .with_context(|| format!("Invalid BUDGET_LOG_LEVEL {:?}", level))?,
            None => defaults.log_level,
        };

        let remote_logging = match remote_logs.map(|flag| flag.trim().to_lowercase()) {
            Some(flag) => matches!(flag.as_str(), "1" | "true" | "yes" | "on"),
            None => defaults.remote_logging,
        };

        Ok(Self {
            api_base_url,
            log_level,
            remote_logging,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
