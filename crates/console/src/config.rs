//! Console settings
//!
//! Loaded from a TOML file; every section and field falls back to its default,
//! so a missing file and an empty file both yield `ConsoleSettings::default()`.

use crate::error::{ConsoleError, ConsoleResult};
use nodectl_primitives::{AddressVersions, MAIN_ADDRESS_VERSION, TEST_ADDRESS_VERSION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Interactive shell settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt shown before each command
    pub prompt: String,
}

/// Address recognition settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub main_address_version: u8,
    pub test_address_version: u8,
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive
    pub level: String,
}

/// Main console configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    pub shell: ShellConfig,
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "nodectl".to_string(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            main_address_version: MAIN_ADDRESS_VERSION,
            test_address_version: TEST_ADDRESS_VERSION,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ConsoleSettings {
    /// Loads settings from `path`, or defaults when the file does not exist.
    pub fn load(path: &Path) -> ConsoleResult<Self> {
        if !path.exists() {
            debug!(target: "nodectl::config", path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content).map_err(|err| match err {
            ConsoleError::InvalidSettings(message) => ConsoleError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        debug!(target: "nodectl::config", path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(content: &str) -> ConsoleResult<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|err| ConsoleError::InvalidSettings(err.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Main and test addresses must be distinguishable by their version byte.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.network.main_address_version == self.network.test_address_version {
            return Err(ConsoleError::InvalidSettings(format!(
                "main and test address versions are both {:#04x}",
                self.network.main_address_version
            )));
        }
        Ok(())
    }

    pub fn address_versions(&self) -> AddressVersions {
        AddressVersions {
            main: self.network.main_address_version,
            test: self.network.test_address_version,
        }
    }
}
