//! Configuration system (layered: code > env > `.env` file).

use std::fmt;
use std::time::Duration;

use crate::error::LookupError;

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model that supports interleaved text and image output.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

const API_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];
const BASE_URL_VAR: &str = "TOPICLENS_BASE_URL";
const MODEL_VAR: &str = "TOPICLENS_MODEL";
const TIMEOUT_VAR: &str = "TOPICLENS_TIMEOUT_SECS";

/// Settings for talking to the generation backend.
///
/// Credentials are always injected, either in code or through the
/// environment; nothing is compiled into the binary.
#[derive(Clone)]
pub struct LookupConfig {
    api_key: Option<String>,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupConfig {
    /// Create a config with default endpoint and model and no API key.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    /// Load from environment variables (GEMINI_API_KEY, GOOGLE_API_KEY, API_KEY, ...).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();

        config.api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()));

        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            config.model = model;
        }
        if let Some(secs) = std::env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Some(Duration::from_secs(secs));
        }

        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Resolve the API key, failing with a configuration error when absent.
    pub fn require_api_key(&self) -> Result<&str, LookupError> {
        self.api_key().ok_or_else(|| {
            LookupError::Configuration(
                "Missing GEMINI_API_KEY (or GOOGLE_API_KEY / API_KEY)".into(),
            )
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
