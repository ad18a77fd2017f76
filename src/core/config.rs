// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;
use thiserror::Error;

use crate::models::DigestAlgorithm;

// Defaults and menu choices for the command line front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_algorithm: DigestAlgorithm,
    pub default_alnum_count: usize,
    pub default_symbol_count: usize,

    // Interactive menu
    pub alnum_choices: Vec<usize>,
    pub symbol_choices: Vec<usize>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_algorithm: DigestAlgorithm::Md5,
            default_alnum_count: 8,
            default_symbol_count: 3,

            // Interactive menu
            alnum_choices: vec![0, 3, 5, 8, 12, 16, 20],
            symbol_choices: vec![0, 3, 5, 8, 12, 16],

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

fn parse_choices(raw: &str) -> Option<Vec<usize>> {
    let mut choices = raw
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .ok()?;
    choices.sort_unstable();
    choices.dedup();
    if choices.is_empty() {
        None
    } else {
        Some(choices)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} '{value}', keeping the default")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str) -> Self {
        ConfigError::InvalidValue { key, value: value.to_string() }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    ///
    /// Unparseable values keep their default and are returned alongside the
    /// config, so they can be reported once logging is up.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut errors = Vec::new();

        // Password Generation
        if let Some(val) = lookup("PASSHASH_ALGORITHM") {
            match val.parse() {
                Ok(algorithm) => config.default_algorithm = algorithm,
                Err(_) => errors.push(ConfigError::invalid("PASSHASH_ALGORITHM", &val)),
            }
        }

        if let Some(val) = lookup("PASSHASH_ALNUM_COUNT") {
            match val.trim().parse() {
                Ok(count) => config.default_alnum_count = count,
                Err(_) => errors.push(ConfigError::invalid("PASSHASH_ALNUM_COUNT", &val)),
            }
        }

        if let Some(val) = lookup("PASSHASH_SYMBOL_COUNT") {
            match val.trim().parse() {
                Ok(count) => config.default_symbol_count = count,
                Err(_) => errors.push(ConfigError::invalid("PASSHASH_SYMBOL_COUNT", &val)),
            }
        }

        // Interactive menu
        if let Some(val) = lookup("PASSHASH_ALNUM_CHOICES") {
            match parse_choices(&val) {
                Some(choices) => config.alnum_choices = choices,
                None => errors.push(ConfigError::invalid("PASSHASH_ALNUM_CHOICES", &val)),
            }
        }

        if let Some(val) = lookup("PASSHASH_SYMBOL_CHOICES") {
            match parse_choices(&val) {
                Some(choices) => config.symbol_choices = choices,
                None => errors.push(ConfigError::invalid("PASSHASH_SYMBOL_CHOICES", &val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.trim().to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => errors.push(ConfigError::invalid("LOG_LEVEL", &level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, errors)
    }
}
