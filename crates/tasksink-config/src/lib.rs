use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// On-disk configuration for the tasksink CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory swept for task files when no path is given on the command
    /// line. Tilde and environment variables are expanded on load.
    pub tasks_path: PathBuf,
}

impl Config {
    /// Load the config from the default location. `Ok(None)` when no config
    /// file exists, which is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: config_path.to_path_buf(),
                source,
            })?;

        config.tasks_path = expand_path(&config.tasks_path).unwrap_or(config.tasks_path);
        Ok(Some(config))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/tasksink");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

/// Expand `~` and `$VARS`; `None` when an unset variable is referenced, so
/// the caller can fall back to the literal path.
fn expand_path(path: &Path) -> Option<PathBuf> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}
