//! Launcher configuration read from the environment.
//!
//! | variable                     | default                                   |
//! |------------------------------|-------------------------------------------|
//! | `TERPENE_ADMIN_HOST`         | `127.0.0.1`                               |
//! | `TERPENE_ADMIN_PORT`         | `8080`                                    |
//! | `TERPENE_ADMIN_OPEN_BROWSER` | `true`                                    |
//! | `TERPENE_API_BASE_URL`       | `https://dev.strainseekr.com/api-server` |
//! | `TERPENE_DISPENSARY_ID`      | `0`                                       |
//! | `TERPENE_STRAIN_TYPE_IDS`    | empty                                     |
//!
//! The last three are what the browser receives from `GET /api/config`.

use common::config::{ClientConfig, DEFAULT_API_BASE_URL};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got `{value}`")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub client: ClientConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("TERPENE_ADMIN_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "TERPENE_ADMIN_PORT",
                expected: "a port number",
                value,
            })?,
            None => 8080,
        };

        let open_browser = match var("TERPENE_ADMIN_OPEN_BROWSER") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                name: "TERPENE_ADMIN_OPEN_BROWSER",
                expected: "true or false",
                value,
            })?,
            None => true,
        };

        let mut client = ClientConfig::new(
            &var("TERPENE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        );
        if let Some(value) = var("TERPENE_DISPENSARY_ID") {
            client.dispensary_id = value.parse().map_err(|_| ConfigError::Invalid {
                name: "TERPENE_DISPENSARY_ID",
                expected: "an integer",
                value,
            })?;
        }
        if let Some(value) = var("TERPENE_STRAIN_TYPE_IDS") {
            client.strain_type_ids = value;
        }

        Ok(Self {
            host: var("TERPENE_ADMIN_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            open_browser,
            client,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
        assert_eq!(config.client.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.client.dispensary_id, 0);
        assert_eq!(config.client.strain_type_ids, "");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("TERPENE_ADMIN_HOST", "0.0.0.0"),
            ("TERPENE_ADMIN_PORT", "9090"),
            ("TERPENE_ADMIN_OPEN_BROWSER", "off"),
            ("TERPENE_API_BASE_URL", "https://staging.example.test/api/"),
            ("TERPENE_DISPENSARY_ID", "17"),
            ("TERPENE_STRAIN_TYPE_IDS", "1,2"),
        ])
        .unwrap();

        assert_eq!(config.url(), "http://0.0.0.0:9090");
        assert!(!config.open_browser);
        assert_eq!(config.client.api_base_url, "https://staging.example.test/api");
        assert_eq!(config.client.dispensary_id, 17);
        assert_eq!(config.client.strain_type_ids, "1,2");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("TERPENE_ADMIN_PORT", "  ")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_bad_port() {
        let err = config_from(&[("TERPENE_ADMIN_PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "TERPENE_ADMIN_PORT must be a port number, got `eighty`"
        );
    }

    #[test]
    fn rejects_bad_flag() {
        assert!(matches!(
            config_from(&[("TERPENE_ADMIN_OPEN_BROWSER", "maybe")]),
            Err(ConfigError::Invalid { name: "TERPENE_ADMIN_OPEN_BROWSER", .. })
        ));
    }
}
