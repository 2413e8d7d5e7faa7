//! Deployment environment and the logging defaults that follow from it

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Variables consulted, in order, to pick the environment
pub const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Deployment environment; selects configuration presets and files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown environment `{0}`, expected development, staging or production")]
pub struct UnknownEnvironment(pub String);

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Environment named by the first set variable of [`ENVIRONMENT_VARS`].
    ///
    /// Falls back to development when none is set or the value is unknown.
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|name| env::var(name).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Optional TOML overrides, e.g. `config.staging.toml`
    pub fn config_file(self) -> String {
        format!("config.{}.toml", self.as_str())
    }

    /// Dotenv file read before `.env`, e.g. `.env.staging`
    pub fn env_file(self) -> String {
        format!(".env.{}", self.as_str())
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

/// Logger settings applied by the binary at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set
    pub level: String,
    /// Colored output when writing to a terminal
    pub colored: bool,
    pub timestamp: bool,
    /// Prefix records with the emitting module path
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Staging)
    }
}

impl LoggingConfig {
    /// Verbose, colored output in development; `info` in staging, `warn` in production
    pub fn for_environment(environment: Environment) -> Self {
        let (level, verbose) = match environment {
            Environment::Development => ("debug", true),
            Environment::Staging => ("info", false),
            Environment::Production => ("warn", false),
        };

        Self {
            level: level.to_string(),
            colored: verbose,
            timestamp: true,
            module_path: verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!(" Stage ".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Production));
    }

    #[test]
    fn test_unknown_environment_is_reported() {
        let err = "qa-7".parse::<Environment>().unwrap_err();
        assert_eq!(err, UnknownEnvironment("qa-7".to_string()));
        assert!(err.to_string().contains("qa-7"));
    }

    #[test]
    fn test_file_names_follow_environment() {
        assert_eq!(Environment::Staging.config_file(), "config.staging.toml");
        assert_eq!(Environment::Production.env_file(), ".env.production");
        assert_eq!(Environment::Development.to_string(), "development");
    }

    #[test]
    fn test_logging_presets() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.level, "debug");
        assert!(dev.colored && dev.module_path);

        let prod = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod.level, "warn");
        assert!(!prod.colored && !prod.module_path);
    }

    #[test]
    fn test_partial_logging_input_keeps_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level":"error"}"#).unwrap();
        assert_eq!(config.level, "error");
        assert!(config.timestamp);
        assert!(!config.module_path);
    }
}
