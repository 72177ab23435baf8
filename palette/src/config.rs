use std::env;
use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{PaletteError, Result};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const MODEL_ENV: &str = "COLOR_PALETTE_MODEL";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gpt-4.1-nano-2025-04-14";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Everything needed to talk to the completion endpoint.
///
/// Built explicitly with [`PaletteConfig::new`] or from the process
/// environment with [`PaletteConfig::from_env`].
pub struct PaletteConfig {
    api_key: SecretString,
    model: String,
    base_url: String,
    temperature: f32,
    timeout: Option<Duration>,
}

impl PaletteConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PaletteError::MissingCredential);
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        })
    }

    /// Reads `OPENAI_API_KEY`, plus the optional `COLOR_PALETTE_MODEL` and
    /// `OPENAI_BASE_URL` overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = non_empty_var(API_KEY_ENV).ok_or(PaletteError::MissingCredential)?;
        let mut config = Self::new(api_key)?;

        if let Some(model) = non_empty_var(MODEL_ENV) {
            config.model = model;
        }
        if let Some(base_url) = non_empty_var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for PaletteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
