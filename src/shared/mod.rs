//! Types shared across the client: configuration and form validation.

pub mod config;
pub mod validation;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
