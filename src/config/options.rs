// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is required (set {ENV_API_KEY} or pass --api-key)")]
    MissingApiKey,

    #[error("invalid timeout {value:?}: expected whole seconds > 0")]
    InvalidTimeout { value: String },

    #[error("invalid base URL {value:?}: expected http:// or https://")]
    InvalidBaseUrl { value: String },
}

/// Extraction API key. Never printed, never logged.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Rejects empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self(SecretString::from(s!(trimmed))))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        Self::parse(&raw)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Only call this when building the request header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self(SecretString::from(s!(self.expose())))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub gateway: GatewayOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            gateway: GatewayOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults overridden by whatever `lookup` returns for the known env names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            opts.gateway.set_base_url(&url)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            opts.gateway.timeout = parse_timeout(&secs)?;
        }
        if let Some(dir) = lookup(ENV_OUT_DIR) {
            if !dir.trim().is_empty() {
                opts.export.set_dir(&dir);
            }
        }
        Ok(opts)
    }

    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|k| std::env::var(k).ok())
    }
}

pub fn parse_timeout(text: &str) -> Result<Duration, ConfigError> {
    match text.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout { value: s!(text) }),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayOptions {
    base_url: String,
    /// Per-request timeout; a hung upstream fails instead of hanging the refresh.
    pub timeout: Duration,
    pub poll_interval: Duration,
    pub max_polls: u32,
    /// Send the dataset's output-shape descriptor with each request.
    pub send_output_schema: bool,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            max_polls: MAX_POLLS,
            send_output_schema: true,
        }
    }
}

impl GatewayOptions {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Accepts http(s) URLs; trailing slashes are dropped.
    pub fn set_base_url(&mut self, text: &str) -> Result<(), ConfigError> {
        let t = text.trim().trim_end_matches('/');
        if !(t.starts_with("http://") || t.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl { value: s!(text) });
        }
        self.base_url = s!(t);
        Ok(())
    }

    pub fn smartscraper_url(&self) -> String {
        join!(&self.base_url, SMARTSCRAPER_PATH)
    }

    pub fn status_url(&self, request_id: &str) -> String {
        join!(&self.base_url, SMARTSCRAPER_PATH, "/", request_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Both,
}

impl ExportFormat {
    /// Concrete single-file formats this choice expands to.
    pub fn files(self) -> &'static [ExportFormat] {
        match self {
            ExportFormat::Csv => &[ExportFormat::Csv],
            ExportFormat::Json => &[ExportFormat::Json],
            ExportFormat::Both => &[ExportFormat::Csv, ExportFormat::Json],
        }
    }

    pub fn ext(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Both => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Both,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory.
    pub fn set_dir(&mut self, text: &str) {
        let t = text.trim();
        self.out_dir = if t.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(t)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (s!(*k), s!(*v)))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn api_key_rejects_blank() {
        assert_eq!(ApiKey::parse("   ").unwrap_err(), ConfigError::MissingApiKey);
        assert_eq!(ApiKey::parse(" sgai-123 ").unwrap().expose(), "sgai-123");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::parse("sgai-secret").unwrap();
        assert!(!format!("{key:?}").contains("secret"));
    }

    #[test]
    fn env_overrides_defaults() {
        let opts = AppOptions::from_lookup(lookup(&[
            (ENV_BASE_URL, "http://localhost:8080/"),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_OUT_DIR, "exports"),
        ]))
        .unwrap();
        assert_eq!(opts.gateway.base_url(), "http://localhost:8080");
        assert_eq!(opts.gateway.timeout, Duration::from_secs(15));
        assert_eq!(opts.export.out_dir(), Path::new("exports"));
        assert_eq!(
            opts.gateway.smartscraper_url(),
            "http://localhost:8080/v1/smartscraper"
        );
    }

    #[test]
    fn bad_timeout_is_an_error() {
        let err = AppOptions::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }
}
