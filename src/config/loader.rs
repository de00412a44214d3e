//! Registry loading from disk.
//!
//! # Responsibilities
//! - Locate the registry file (explicit path, env var, working directory)
//! - Parse and deserialize the TOML registry
//! - Carry validation failures alongside load failures

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{Registry, ResolvedEnvironment};
use crate::config::validation::{self, ValidationError};

/// Environment variable naming an alternate registry path.
pub const CONFIG_ENV_VAR: &str = "ECSRUN_CONFIG";

/// Registry file looked up in the working directory when nothing else is
/// set.
pub const DEFAULT_CONFIG_FILE: &str = "ecsrun.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The registry file could not be read.
    #[error("failed to read environment registry {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not valid TOML.
    #[error("failed to parse environment registry {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No registry file was found anywhere.
    #[error(
        "no environment registry found (looked for ecsrun.toml in the working \
         directory; set --config or ECSRUN_CONFIG)"
    )]
    MissingRegistry,

    /// The registry was loaded but failed semantic checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Load the registry and resolve one environment from it.
pub fn load_environment(
    explicit: Option<&Path>,
    name: &str,
) -> Result<ResolvedEnvironment, ConfigError> {
    let registry = load_registry(explicit)?;
    Ok(validation::resolve_environment(&registry, name)?)
}

/// Load the environment registry.
///
/// Tries `explicit` first, then the `ECSRUN_CONFIG` environment variable,
/// then `ecsrun.toml` in the working directory.
pub fn load_registry(explicit: Option<&Path>) -> Result<Registry, ConfigError> {
    match locate(explicit) {
        Some(path) => load_registry_file(&path),
        None => Err(ConfigError::MissingRegistry),
    }
}

/// Load and parse a registry from a specific file.
pub fn load_registry_file(path: &Path) -> Result<Registry, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Environment registry loaded");
    Ok(registry)
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.exists().then_some(default)
}
