//! Configuration module for the toyc driver.
//!
//! Settings come from a `toyc.toml` file. Command-line flags override
//! whatever the file says; fields missing from the file take defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "toyc.toml";

/// Default extension for derived listing files.
pub const DEFAULT_EXTENSION: &str = "lex";

/// How the token listing is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text listing, one token per line.
    #[default]
    Text,
    /// JSON array of token objects.
    Json,
}

impl FromStr for OutputFormat {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DriverError::Config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Print the listing to stdout.
    #[serde(default = "default_true")]
    pub echo: bool,

    /// Write `<input stem>.<extension>` beside the input when no output
    /// path is given on the command line.
    #[serde(default)]
    pub write_lex_file: bool,

    /// Extension used for derived output files.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Listing format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo: true,
            write_lex_file: false,
            extension: default_extension(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for `toyc.toml` in the current directory, then in the user's
    /// configuration directory. Returns the defaults if neither exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Fails if the file does not exist, cannot be read or is not valid TOML.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| DriverError::io(path, e))?;
        let config = Self::parse(&content)?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DriverError::io(parent, e))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            DriverError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| DriverError::io(path, e))
    }

    /// Path of the listing file derived from `input`, when
    /// `write_lex_file` is enabled.
    pub fn derived_output(&self, input: &Path) -> Option<PathBuf> {
        self.write_lex_file
            .then(|| input.with_extension(self.extension.trim_start_matches('.')))
    }

    fn validate(&self) -> Result<()> {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(DriverError::Config(format!(
                "invalid output extension '{}'",
                self.extension
            )));
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("toyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
