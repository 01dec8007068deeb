//! Configuration loading.
//!
//! Overrides are layered in a fixed order, later layers winning:
//! compiled-in defaults, then the TOML settings file, then environment
//! variables. CLI flags are applied by the startup path on top of the
//! result. Validation runs once, eagerly, after all layers are merged, so
//! a misconfigured deployment fails at startup rather than mid-request.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::PortfolioConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the settings file when no CLI path is given.
pub const ENV_CONFIG: &str = "PORTFOLIO_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid environment override {var}: {value:?}")]
    Env { var: &'static str, value: String },

    #[error("configuration validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the configuration.
///
/// `path` points at an optional TOML settings file; when absent, the
/// `PORTFOLIO_CONFIG` environment variable is consulted, and failing that
/// the compiled-in defaults are used as-is.
pub fn load_config(path: Option<&Path>) -> Result<PortfolioConfig, ConfigError> {
    let env_path = env::var(ENV_CONFIG).ok().map(PathBuf::from);
    let path = path.or(env_path.as_deref());

    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&content)?
        }
        None => PortfolioConfig::default(),
    };

    apply_env_overrides(&mut config, |var| env::var(var).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Deserialize a settings document over the compiled-in defaults.
///
/// Missing sections and fields fall back field-wise, so the document only
/// has to carry what it changes.
pub fn parse_config(content: &str) -> Result<PortfolioConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Apply environment overrides for the scalar fields.
///
/// Collection-valued fields (skills, projects, ...) are only overridable
/// through the settings file; an environment variable is no place for a
/// project list.
fn apply_env_overrides<F>(
    config: &mut PortfolioConfig,
    lookup: F,
) -> Result<(), ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    if let Some(value) = lookup("PORTFOLIO_HOST") {
        config.server.host = value;
    }
    if let Some(value) = lookup("PORTFOLIO_PORT") {
        config.server.port = value.parse().map_err(|_| ConfigError::Env {
            var: "PORTFOLIO_PORT",
            value,
        })?;
    }
    if let Some(value) = lookup("PORTFOLIO_DEBUG") {
        config.server.debug = parse_bool(&value).ok_or(ConfigError::Env {
            var: "PORTFOLIO_DEBUG",
            value,
        })?;
    }

    if let Some(value) = lookup("PORTFOLIO_NAME") {
        config.identity.name = value;
    }
    if let Some(value) = lookup("PORTFOLIO_TITLE") {
        config.identity.title = value;
    }
    if let Some(value) = lookup("PORTFOLIO_EMAIL") {
        config.identity.email = value;
    }
    if let Some(value) = lookup("PORTFOLIO_LOCATION") {
        config.identity.location = value;
    }
    if let Some(value) = lookup("PORTFOLIO_BIO") {
        config.identity.bio = value;
    }

    if let Some(value) = lookup("PORTFOLIO_PRIMARY_COLOR") {
        config.theme.primary_color = value;
    }
    if let Some(value) = lookup("PORTFOLIO_SECONDARY_COLOR") {
        config.theme.secondary_color = value;
    }
    if let Some(value) = lookup("PORTFOLIO_DARK_MODE") {
        config.theme.dark_mode = parse_bool(&value).ok_or(ConfigError::Env {
            var: "PORTFOLIO_DARK_MODE",
            value,
        })?;
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
