use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:5000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    /// (forwarded from .env by build.rs).
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("http://localhost:5000").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Full URL for an API endpoint. Every backend route lives under /api.
    pub fn api_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}/api{}", self.backend_url, endpoint)
        } else {
            format!("{}/api/{}", self.backend_url, endpoint)
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_prefixes_api_segment() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("/auth/login"), "http://localhost:5000/api/auth/login");
        assert_eq!(config.api_url("auth/login"), "http://localhost:5000/api/auth/login");
    }
}
