//! Tests for configuration system.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use topiclens::config::{LookupConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use topiclens::error::LookupError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 6] = [
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "API_KEY",
    "TOPICLENS_BASE_URL",
    "TOPICLENS_MODEL",
    "TOPICLENS_TIMEOUT_SECS",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clear_env() {
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_point_at_gemini() {
    let config = LookupConfig::new();
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.api_key(), None);
    assert_eq!(config.timeout(), None);
}

#[test]
fn builder_setters_override_defaults() {
    let config = LookupConfig::new()
        .with_api_key("k")
        .with_base_url("http://localhost:8080/")
        .with_model("m")
        .with_timeout(Duration::from_secs(5));

    assert_eq!(config.require_api_key().unwrap(), "k");
    assert_eq!(config.base_url(), "http://localhost:8080");
    assert_eq!(config.model(), "m");
    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn require_api_key_reports_configuration_error() {
    let err = LookupConfig::new().require_api_key().unwrap_err();
    assert!(matches!(err, LookupError::Configuration(_)));
}

#[test]
fn debug_output_redacts_api_key() {
    let config = LookupConfig::new().with_api_key("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"), "{debug}");
}

#[test]
fn from_env_reads_key_and_overrides() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();

    std::env::set_var("GOOGLE_API_KEY", "google-key");
    std::env::set_var("TOPICLENS_BASE_URL", "http://proxy.test/v1beta");
    std::env::set_var("TOPICLENS_MODEL", "custom-model");
    std::env::set_var("TOPICLENS_TIMEOUT_SECS", "42");

    let config = LookupConfig::from_env();
    assert_eq!(config.api_key(), Some("google-key"));
    assert_eq!(config.base_url(), "http://proxy.test/v1beta");
    assert_eq!(config.model(), "custom-model");
    assert_eq!(config.timeout(), Some(Duration::from_secs(42)));
}

#[test]
fn from_env_prefers_gemini_key() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();

    std::env::set_var("API_KEY", "generic");
    std::env::set_var("GEMINI_API_KEY", "gemini");

    assert_eq!(LookupConfig::from_env().api_key(), Some("gemini"));
}

#[test]
fn from_env_ignores_blank_key_and_bad_timeout() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    clear_env();

    std::env::set_var("GEMINI_API_KEY", "  ");
    std::env::set_var("API_KEY", "fallback");
    std::env::set_var("TOPICLENS_TIMEOUT_SECS", "soon");

    let config = LookupConfig::from_env();
    assert_eq!(config.api_key(), Some("fallback"));
    assert_eq!(config.timeout(), None);
}
