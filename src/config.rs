//! Application Configuration
//!
//! Resolved once at startup. The REST origin can be overridden at build time
//! with `BANK_ADMIN_API_URL`, the log level with `BANK_ADMIN_LOG_LEVEL`.

use log::LevelFilter;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// localStorage key holding the session token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Rows per page on paged lists
pub const PAGE_SIZE: u32 = 5;

/// How long a success notice stays visible
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Config baked in by the build environment
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::resolve(option_env!("BANK_ADMIN_API_URL"), option_env!("BANK_ADMIN_LOG_LEVEL"))
    }

    pub fn resolve(base_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = match base_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => normalize_base_url(raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
            None => DEFAULT_LOG_LEVEL,
        };
        Ok(Self { api_base_url, log_level })
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    let Some((scheme, host)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    };
    if !matches!(scheme, "http" | "https") || host.is_empty() || host.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
