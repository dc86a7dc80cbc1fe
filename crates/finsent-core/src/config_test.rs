use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn assert_invalid(result: Result<AppConfig, ConfigError>, expected: &str) {
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == expected),
        "expected InvalidEnvVar({expected}), got: {result:?}"
    );
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.max_attempts, 3);
    assert!((cfg.backoff_base_secs - 2.0).abs() < f64::EPSILON);
    assert_eq!(cfg.feeds, default_feed_sources());
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("FINSENT_LOG_LEVEL", "debug");
    map.insert("FINSENT_OUTPUT_DIR", "/tmp/reports");
    map.insert("FINSENT_REQUEST_TIMEOUT_SECS", "30");
    map.insert("FINSENT_USER_AGENT", "custom-agent/2.0");
    map.insert("FINSENT_MAX_ATTEMPTS", "5");
    map.insert("FINSENT_BACKOFF_BASE_SECS", "1.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/reports"));
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.max_attempts, 5);
    assert!((cfg.backoff_base_secs - 1.5).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = HashMap::new();
    map.insert("FINSENT_REQUEST_TIMEOUT_SECS", "not-a-number");
    assert_invalid(
        build_app_config(lookup_from_map(&map)),
        "FINSENT_REQUEST_TIMEOUT_SECS",
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("FINSENT_REQUEST_TIMEOUT_SECS", "0");
    assert_invalid(
        build_app_config(lookup_from_map(&map)),
        "FINSENT_REQUEST_TIMEOUT_SECS",
    );
}

#[test]
fn build_app_config_rejects_zero_attempts() {
    let mut map = HashMap::new();
    map.insert("FINSENT_MAX_ATTEMPTS", "0");
    assert_invalid(build_app_config(lookup_from_map(&map)), "FINSENT_MAX_ATTEMPTS");
}

#[test]
fn build_app_config_rejects_backoff_base_of_one() {
    let mut map = HashMap::new();
    map.insert("FINSENT_BACKOFF_BASE_SECS", "1");
    assert_invalid(
        build_app_config(lookup_from_map(&map)),
        "FINSENT_BACKOFF_BASE_SECS",
    );
}

#[test]
fn build_app_config_rejects_non_finite_backoff_base() {
    let mut map = HashMap::new();
    map.insert("FINSENT_BACKOFF_BASE_SECS", "inf");
    assert_invalid(
        build_app_config(lookup_from_map(&map)),
        "FINSENT_BACKOFF_BASE_SECS",
    );
}

#[test]
fn build_app_config_loads_feeds_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("feeds.yaml");
    let path_str = path.to_str().expect("manifest path should be UTF-8");
    let mut map = HashMap::new();
    map.insert("FINSENT_FEEDS_PATH", path_str);
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feeds.len(), 15);
}

#[test]
fn build_app_config_fails_on_missing_feeds_file() {
    let mut map = HashMap::new();
    map.insert("FINSENT_FEEDS_PATH", "/nonexistent/finsent/feeds.yaml");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::FeedsFileIo { .. })),
        "expected FeedsFileIo, got: {result:?}"
    );
}
