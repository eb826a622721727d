use filmpath_core::pathfinding_config::{DEFAULT_MAX_EXPANSIONS, DEFAULT_PATH_LIMIT};
use std::{env, path::PathBuf};
use thiserror::Error;

const DEFAULT_CATALOGUE_PATH: &str = "movies.sqlite";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_EXPLORE_BUDGET: usize = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer (got {value:?})")]
    InvalidNumber { name: &'static str, value: String },
}

/// Server settings read from the environment (and `.env`, when present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub catalogue_path: PathBuf,
    pub bind_addr: String,
    pub default_path_limit: usize,
    /// Expansion guard for `/api/path`
    pub max_path_expansions: usize,
    /// Upper bound on the `budget` accepted by `/api/explore`
    pub max_explore_budget: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; unset or blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|text| !text.trim().is_empty());

        let catalogue_path = value("CATALOGUE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOGUE_PATH));
        let bind_addr = value("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let default_path_limit = match value("DEFAULT_PATH_LIMIT") {
            Some(text) => parse_positive("DEFAULT_PATH_LIMIT", &text)?,
            None => DEFAULT_PATH_LIMIT,
        };
        let max_path_expansions = match value("MAX_PATH_EXPANSIONS") {
            Some(text) => parse_positive("MAX_PATH_EXPANSIONS", &text)?,
            None => DEFAULT_MAX_EXPANSIONS,
        };
        let max_explore_budget = match value("MAX_EXPLORE_BUDGET") {
            Some(text) => parse_positive("MAX_EXPLORE_BUDGET", &text)?,
            None => DEFAULT_MAX_EXPLORE_BUDGET,
        };

        Ok(Self {
            catalogue_path,
            bind_addr,
            default_path_limit,
            max_path_expansions,
            max_explore_budget,
        })
    }
}

fn parse_positive(name: &'static str, text: &str) -> Result<usize, ConfigError> {
    match text.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: text.to_string(),
        }),
    }
}
