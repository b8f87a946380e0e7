//! Runtime configuration
//!
//! The display name and the backend origin come from the environment at
//! startup; absent values fall back to hard-coded defaults.

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default backend origin (a local PocketBase instance)
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8090";

/// Default application display name
const DEFAULT_APP_NAME: &str = "Osobni Blog";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("OBLOG_BACKEND_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app_name =
            std::env::var("OBLOG_APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .app_name(app_name)
            .build()
            .unwrap_or_default();
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Backend origin
    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Display name for the window title and header
    pub fn app_name(&self) -> &str {
        self.app.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_builder() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("http://blog.example.com".to_string())
                .app_name("Moj Blog".to_string()),
        )
        .unwrap();
        assert_eq!(config.server_url(), "http://blog.example.com");
        assert_eq!(config.app_name(), "Moj Blog");
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::with_builder(AppConfig::builder()).unwrap();
        assert_eq!(config.server_url(), "http://127.0.0.1:8090");
        assert_eq!(config.app_name(), "Osobni Blog");
    }
}
