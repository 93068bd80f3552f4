use dotenv::{dotenv, from_path};
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str =
    "api_server=debug,application=info,infrastructure=info,tower_http=debug";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Failed to load .env file from path {path}: {message}")]
    EnvFile { path: String, message: String },

    #[error("Invalid {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub seed_on_startup: bool,
    pub log_filter: String,
    pub environment: String,
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_path {
            from_path(path).map_err(|e| ConfigError::EnvFile {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        } else {
            // A missing default `.env` is fine
            dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "movies.db".to_string()),
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: parse_or(&lookup, "API_PORT", 8080)?,
            seed_on_startup: parse_bool_or(&lookup, "SEED_ON_STARTUP", true)?,
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            environment: lookup("ENV").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            message: format!("'{}' ({})", raw, e),
        }),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|raw| raw.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(raw) => match raw.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key,
                message: format!("'{}' is not a boolean", raw),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.database_url, "movies.db");
        assert_eq!(config.api_address(), "0.0.0.0:8080");
        assert!(config.seed_on_startup);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn explicit_values_win() {
        let config = config_from(&[
            ("DATABASE_URL", ":memory:"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "3000"),
            ("SEED_ON_STARTUP", "off"),
        ])
        .unwrap();

        assert_eq!(config.database_url, ":memory:");
        assert_eq!(config.api_address(), "127.0.0.1:3000");
        assert!(!config.seed_on_startup);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = config_from(&[("API_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "API_PORT", .. }));

        let err = config_from(&[("SEED_ON_STARTUP", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "SEED_ON_STARTUP", .. }));
    }
}
