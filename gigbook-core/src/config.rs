//! Global gigbook configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{GigbookError, GigbookResult};

static DEFAULT_DATA_PATH: &str = "~/.gigbook";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/gigbook/config.toml
///
/// The agency's data (artists, events, notifications, profile, session)
/// lives as JSON snapshots under `data_dir`.
#[derive(Serialize, Deserialize, Clone)]
pub struct GigbookConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,
}

impl Default for GigbookConfig {
    fn default() -> Self {
        GigbookConfig {
            data_dir: default_data_path(),
        }
    }
}

impl GigbookConfig {
    pub fn config_path() -> GigbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GigbookError::Config("Could not determine config directory".into()))?
            .join("gigbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> GigbookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| GigbookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GigbookError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The data directory in display-friendly form, keeping `~` instead of
    /// expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.data_dir.clone()
    }

    /// Save the current config to ~/.config/gigbook/config.toml
    pub fn save(&self) -> GigbookResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| GigbookError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| GigbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> GigbookResult<()> {
        let contents = format!(
            "\
# gigbook configuration

# Where your agency data lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GigbookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GigbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
