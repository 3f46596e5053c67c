//! Configuration management module
//!
//! Responsible for loading the process-wide, read-only configuration from environment variables

pub mod settings;

pub use settings::{LoggingConfig, OpenWeatherConfig, SecurityConfig, ServerConfig, Settings};
