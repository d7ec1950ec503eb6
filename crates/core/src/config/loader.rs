//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Project-local file names, checked in order
const LOCAL_CANDIDATES: [&str; 3] = [".asteria.toml", "asteria.toml", ".config/asteria.toml"];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one the standard locations are
    /// searched and defaults are used when none is found.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                let expanded = PathBuf::from(shellexpand::tilde(p).into_owned());
                if !expanded.exists() {
                    return Err(Error::config_not_found(&expanded));
                }
                Some(expanded)
            }
            None => find_config_file(),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => {
                tracing::debug!("No configuration file found, using defaults");
                ConfigSchema::default()
            }
        };

        schema
            .validate()
            .context(match &config_path {
                Some(p) => format!("In {}", p.display()),
                None => "In default configuration".to_string(),
            })?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = LOCAL_CANDIDATES.iter().map(PathBuf::from);
    let user = dirs::config_dir().map(|dir| dir.join("asteria").join("config.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e).with_context(format!("Failed to read config file {}", path.display()))
    })?;

    let schema = toml::from_str(&content)
        .map_err(|e| Error::from(e).with_context(format!("Failed to parse config file {}", path.display())))?;

    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(schema)
}
