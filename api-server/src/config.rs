// Server configuration from environment variables

use gemini_client::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR \"{0}\": expected host:port")]
    InvalidBindAddr(String),

    #[error("invalid GEMINI_TIMEOUT_SECS \"{0}\": expected a positive integer")]
    InvalidTimeout(String),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Gemini API key (GOOGLE_GENERATIVE_AI_API_KEY); requests fail while unset
    pub api_key: Option<String>,

    /// Model name (GEMINI_MODEL)
    pub model: String,

    /// API root (GEMINI_BASE_URL)
    pub base_url: String,

    /// Outbound request timeout (GEMINI_TIMEOUT_SECS)
    pub timeout: Duration,

    /// Listen address (BIND_ADDR)
    pub bind_addr: SocketAddr,

    /// Directory for rotated log files (LOG_DIR)
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match get("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(DEFAULT_BIND_ADDR.to_string()))?,
        };

        let timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key: get("GOOGLE_GENERATIVE_AI_API_KEY"),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
            bind_addr,
            log_dir: get("LOG_DIR").map(PathBuf::from),
        })
    }

    /// Gemini client settings, if a credential is configured
    pub fn gemini(&self) -> Option<GeminiConfig> {
        self.api_key.as_ref().map(|key| GeminiConfig {
            api_key: key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        })
    }
}
