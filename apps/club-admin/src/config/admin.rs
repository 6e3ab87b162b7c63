//! Runtime configuration read from the environment at startup.
//!
//! | Variable             | Default                 |
//! |----------------------|-------------------------|
//! | `ADMIN_HOST`         | `0.0.0.0`               |
//! | `ADMIN_PORT`         | `3000`                  |
//! | `TENNIS_API_URL`     | `http://localhost:8080` |
//! | `ADMIN_EDIT_PREFILL` | `false`                 |
//!
//! Logging is configured separately by `RUST_LOG` and `ADMIN_LOG_FORMAT`
//! (`json` or `pretty`), read when tracing is installed.

use std::env;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Seed edit forms with the current record instead of starting blank.
    pub edit_prefill: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            api_base_url: "http://localhost:8080".to_string(),
            edit_prefill: false,
        }
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = env::var("ADMIN_HOST").unwrap_or(defaults.host);
        let port = match env::var("ADMIN_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("ADMIN_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => defaults.port,
        };
        let api_base_url = match env::var("TENNIS_API_URL") {
            Ok(raw) => normalize_base_url(&raw)?,
            Err(_) => defaults.api_base_url,
        };
        let edit_prefill = match env::var("ADMIN_EDIT_PREFILL") {
            Ok(raw) => parse_flag("ADMIN_EDIT_PREFILL", &raw)?,
            Err(_) => defaults.edit_prefill,
        };

        Ok(Self {
            host,
            port,
            api_base_url,
            edit_prefill,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(AppError::config(format!(
            "TENNIS_API_URL must be an http(s) URL, got '{raw}'"
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean flag, got '{raw}'"
        ))),
    }
}
