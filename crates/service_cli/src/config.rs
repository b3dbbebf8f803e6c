//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! CLI arguments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Prefix of every environment variable the CLI reads.
pub const ENV_PREFIX: &str = "MCGRID_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Initial price shared by every cell
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Time steps per path
    pub days: usize,
    /// Paths per kernel run
    pub paths: usize,
    /// Base seed for per-cell streams
    pub seed: u64,
    /// Lowest strike of the grid
    pub strike_min: f64,
    /// Highest strike of the grid
    pub strike_max: f64,
    /// Number of strikes
    pub n_strikes: usize,
    /// Lowest volatility of the grid
    pub sigma_min: f64,
    /// Highest volatility of the grid
    pub sigma_max: f64,
    /// Number of volatilities
    pub n_sigmas: usize,
    /// Dedicated worker threads (global Rayon pool when unset)
    pub threads: Option<usize>,
    /// Stop scheduling cells after the first failure
    pub fail_fast: bool,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            days: 260,
            paths: 10_000,
            seed: 42,
            strike_min: 90.0,
            strike_max: 110.0,
            n_strikes: 5,
            sigma_min: 0.1,
            sigma_max: 0.4,
            n_sigmas: 5,
            threads: None,
            fail_fast: true,
            format: OutputFormat::Table,
            log_level: LogLevel::Info,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{key}={value:?} could not be parsed")))
}

impl GridConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `MCGRID_*` variables found by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };

        if let Some((k, v)) = var("SPOT") {
            self.spot = parse_env(&k, &v)?;
        }
        if let Some((k, v)) = var("RATE") {
            self.rate = parse_env(&k, &v)?;
        }
        if let Some((k, v)) = var("DAYS") {
            self.days = parse_env(&k, &v)?;
        }
        if let Some((k, v)) = var("PATHS") {
            self.paths = parse_env(&k, &v)?;
        }
        if let Some((k, v)) = var("SEED") {
            self.seed = parse_env(&k, &v)?;
        }
        if let Some((k, v)) = var("THREADS") {
            self.threads = Some(parse_env(&k, &v)?);
        }
        if let Some((k, v)) = var("FAIL_FAST") {
            self.fail_fast = parse_env(&k, &v.to_lowercase())?;
        }
        if let Some((_, v)) = var("FORMAT") {
            self.format = OutputFormat::from_str(&v)?;
        }
        if let Some((_, v)) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&v)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = cli.$field {
                    self.$field = value;
                })*
            };
        }
        take!(
            spot, rate, days, paths, seed, strike_min, strike_max, n_strikes, sigma_min,
            sigma_max, n_sigmas, format,
        );
        if cli.threads.is_some() {
            self.threads = cli.threads;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: &str| {
            Err(ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            })
        };

        if self.days == 0 {
            return invalid("days", "must be at least 1");
        }
        if self.paths == 0 {
            return invalid("paths", "must be at least 1");
        }
        if self.n_strikes == 0 {
            return invalid("n_strikes", "must be at least 1");
        }
        if self.n_sigmas == 0 {
            return invalid("n_sigmas", "must be at least 1");
        }
        if self.strike_min.is_nan()
            || self.strike_max.is_nan()
            || self.strike_min > self.strike_max
        {
            return invalid("strike_min", "must not exceed strike_max");
        }
        if self.sigma_min.is_nan() || self.sigma_max.is_nan() || self.sigma_min > self.sigma_max {
            return invalid("sigma_min", "must not exceed sigma_max");
        }
        if self.threads == Some(0) {
            return invalid("threads", "must be at least 1");
        }
        Ok(())
    }
}

/// CLI argument overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub spot: Option<f64>,
    pub rate: Option<f64>,
    pub days: Option<usize>,
    pub paths: Option<usize>,
    pub seed: Option<u64>,
    pub strike_min: Option<f64>,
    pub strike_max: Option<f64>,
    pub n_strikes: Option<usize>,
    pub sigma_min: Option<f64>,
    pub sigma_max: Option<f64>,
    pub n_sigmas: Option<usize>,
    pub threads: Option<usize>,
    pub format: Option<OutputFormat>,
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config<F>(
    config_file: Option<&Path>,
    lookup_env: F,
    cli: &CliOverrides,
) -> Result<GridConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_file {
        Some(path) => GridConfig::from_file(path)?,
        None => GridConfig::default(),
    };

    config.apply_env(lookup_env)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.spot, 100.0);
        assert_eq!(config.rate, 0.05);
        assert_eq!(config.days, 260);
        assert_eq!(config.paths, 10_000);
        assert_eq!((config.n_strikes, config.n_sigmas), (5, 5));
        assert_eq!(config.threads, None);
        assert!(config.fail_fast);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GridConfig::from_toml_str(
            r#"
            paths = 2000
            n_strikes = 3
            format = "csv"
            log_level = "warn"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths, 2000);
        assert_eq!(config.n_strikes, 3);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.days, 260);
        assert_eq!(config.strike_max, 110.0);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            GridConfig::from_toml_str("format = \"xml\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(GridConfig::from_toml_str("paths = \"many\"").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = GridConfig::default();
        config
            .apply_env(env(&[
                ("MCGRID_PATHS", "500"),
                ("MCGRID_THREADS", "4"),
                ("MCGRID_FAIL_FAST", "FALSE"),
                ("MCGRID_FORMAT", "json"),
                ("PATHS", "1"),
            ]))
            .unwrap();

        assert_eq!(config.paths, 500);
        assert_eq!(config.threads, Some(4));
        assert!(!config.fail_fast);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_value_reported() {
        let mut config = GridConfig::default();
        let err = config.apply_env(env(&[("MCGRID_DAYS", "ten")])).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(ref msg) if msg.contains("MCGRID_DAYS")));
    }

    #[test]
    fn test_precedence_cli_over_env() {
        let cli = CliOverrides {
            paths: Some(123),
            verbose: true,
            ..Default::default()
        };
        let config = build_config(
            None,
            env(&[("MCGRID_PATHS", "500"), ("MCGRID_SEED", "9")]),
            &cli,
        )
        .unwrap();

        assert_eq!(config.paths, 123);
        assert_eq!(config.seed, 9);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validation() {
        let config = GridConfig {
            sigma_min: 0.5,
            sigma_max: 0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "sigma_min", .. })
        ));

        let config = GridConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GridConfig {
            paths: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = GridConfig::from_file(Path::new("/nonexistent/mcgrid.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }
}
