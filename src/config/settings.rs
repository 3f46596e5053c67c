//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use std::fmt;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default OpenWeatherMap API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default upstream timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default browser origin allowed to call the API
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// OpenWeatherMap API configuration
    pub openweather: OpenWeatherConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// OpenWeatherMap API configuration
#[derive(Clone)]
pub struct OpenWeatherConfig {
    /// API key, `None` when not configured
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// The single browser origin allowed by the CORS policy
    pub allowed_origin: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

// The key must never end up in logs.
impl fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Create a new configuration instance from the environment
    ///
    /// A missing API key is not an error here: it is recorded as `None` and
    /// surfaced per request by the API-key guard.
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("PORT", &DEFAULT_PORT.to_string())
                    .parse()
                    .context("Invalid port number")?,
            },
            openweather: OpenWeatherConfig {
                api_key: std::env::var(API_KEY_VAR)
                    .ok()
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty()),
                base_url: get_env_or_default("OPENWEATHER_BASE_URL", DEFAULT_BASE_URL),
                timeout_ms: get_env_or_default("UPSTREAM_TIMEOUT_MS", &DEFAULT_TIMEOUT_MS.to_string())
                    .parse()
                    .context("Invalid upstream timeout")?,
            },
            security: SecurityConfig {
                allowed_origin: get_env_or_default("ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN),
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.openweather.base_url.starts_with("http") {
            anyhow::bail!("Invalid OpenWeatherMap base URL format, should start with 'http'");
        }

        if self.openweather.timeout_ms == 0 {
            anyhow::bail!("Upstream timeout cannot be 0");
        }

        if !self.security.allowed_origin.starts_with("http") {
            anyhow::bail!(
                "Invalid allowed origin: {}, should start with 'http'",
                self.security.allowed_origin
            );
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.openweather.api_key.as_deref()
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.openweather.api_key.is_some()
    }

    /// Listen address in `host:port` form
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
