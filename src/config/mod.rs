use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

/// Client-side settings: where the dispatcher sends non-demo requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Server-side settings for the mock backend binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_request_logging: bool,
}

const DEV_API_URL: &str = "http://localhost:5263";
const PROD_API_URL: &str = "https://api.finbin.example.com";

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("FINBIN_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let mut config = match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        };

        if let Ok(url) = env::var("FINBIN_API_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(port) = env::var("FINBIN_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            config.server.port = port;
        }

        config
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: DEV_API_URL.to_string(),
            },
            server: ServerConfig {
                port: 5263,
                enable_request_logging: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: PROD_API_URL.to_string(),
            },
            server: ServerConfig {
                port: 5263,
                enable_request_logging: false,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.api.base_url, DEV_API_URL);
        assert!(config.server.enable_request_logging);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.api.base_url, PROD_API_URL);
        assert!(!config.server.enable_request_logging);
    }
}
