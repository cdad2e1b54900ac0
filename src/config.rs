//! Configuration persistence
//!
//! The config is a JSON object stored at the platform-appropriate location:
//! - macOS: ~/Library/Application Support/regex_editor/config.json
//! - Windows: %APPDATA%/regex_editor/config.json
//! - Linux: ~/.config/regex_editor/config.json
//!
//! The only recognised key is `api_key`. Problems reading or writing the file
//! are logged and otherwise ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the user config dir
const CONFIG_DIR_NAME: &str = "regex_editor";

/// File name inside the config directory
const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credential for the AI assistant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Somewhere the AI credential can be loaded from and saved to
pub trait CredentialStore {
    fn load_credential(&self) -> Option<String>;
    fn save_credential(&mut self, credential: &str);
}

/// The config file on disk
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::user()
    }
}

impl ConfigFile {
    /// The config file in the user's configuration directory
    pub fn user() -> Self {
        let path = dirs::config_dir().map(|mut path| {
            path.push(CONFIG_DIR_NAME);
            path.push(CONFIG_FILE_NAME);
            path
        });
        Self { path }
    }

    /// A config file at an explicit path
    #[cfg(test)]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the config, or return defaults if missing or unreadable
    pub fn load(&self) -> Config {
        let Some(path) = &self.path else {
            log::warn!("Could not determine config directory, using defaults");
            return Config::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Could not parse config file {}: {}, using defaults",
                        path.display(),
                        e
                    );
                    Config::default()
                }
            },
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Could not read config file {}: {}", path.display(), e);
                }
                Config::default()
            }
        }
    }

    /// Write the config, creating the directory if needed
    pub fn save(&self, config: &Config) {
        let Some(path) = &self.path else {
            log::warn!("Could not determine config directory, config not saved");
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(config) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(path, contents) {
                    log::warn!("Failed to write config file {}: {}", path.display(), e);
                } else {
                    log::info!("Saved config to {}", path.display());
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize config: {}", e);
            }
        }
    }
}

impl CredentialStore for ConfigFile {
    fn load_credential(&self) -> Option<String> {
        self.load().api_key.filter(|key| !key.is_empty())
    }

    fn save_credential(&mut self, credential: &str) {
        self.save(&Config {
            api_key: Some(credential.to_string()),
        });
    }
}
