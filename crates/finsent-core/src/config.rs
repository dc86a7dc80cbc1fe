use std::path::{Path, PathBuf};

use crate::app_config::AppConfig;
use crate::feeds::{default_feed_sources, load_feeds};
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the feeds file cannot be loaded.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid or the feeds file cannot be loaded.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults reproduce the stock behaviour
/// (15 built-in feeds, 10 s timeout, 3 attempts, backoff base 2).
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("FINSENT_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("FINSENT_OUTPUT_DIR", "."));
    let user_agent = or_default("FINSENT_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs = parse_u64("FINSENT_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "FINSENT_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }

    let max_attempts = parse_u32("FINSENT_MAX_ATTEMPTS", "3")?;
    if max_attempts == 0 {
        return Err(invalid(
            "FINSENT_MAX_ATTEMPTS",
            "must be at least 1".to_string(),
        ));
    }

    let backoff_base_secs = parse_f64("FINSENT_BACKOFF_BASE_SECS", "2")?;
    if !backoff_base_secs.is_finite() || backoff_base_secs <= 1.0 {
        return Err(invalid(
            "FINSENT_BACKOFF_BASE_SECS",
            format!("must be a finite number greater than 1, got {backoff_base_secs}"),
        ));
    }

    let feeds = match lookup("FINSENT_FEEDS_PATH") {
        Ok(path) => load_feeds(Path::new(&path))?,
        Err(_) => default_feed_sources(),
    };

    Ok(AppConfig {
        log_level,
        output_dir,
        feeds,
        request_timeout_secs,
        user_agent,
        max_attempts,
        backoff_base_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
