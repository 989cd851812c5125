//! Configuration file handling.
//!
//! Settings live in `kplc.toml`. Every field has a default, so a partial
//! file or no file at all is fine.

use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dump::EmitFormat;
use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kplc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Diagnostic rendering settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Dump format.
    #[serde(default)]
    pub format: EmitFormat,

    /// Print a per-kind histogram after the dump.
    #[serde(default)]
    pub stats: bool,
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Show the source line with a caret under each diagnostic.
    #[serde(default)]
    pub snippets: bool,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches the current directory, then the user configuration
    /// directory (`<config dir>/kplc/kplc.toml`). Returns the defaults if
    /// neither exists.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| DriverError::Config(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse configuration text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("kplc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, EmitFormat::Text);
        assert!(!config.output.stats);
        assert!(!config.diagnostics.snippets);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml("[diagnostics]\nsnippets = true\n").unwrap();
        assert!(config.diagnostics.snippets);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml(
            "[output]\nformat = \"json\"\nstats = true\n\n[diagnostics]\nsnippets = true\n",
        )
        .unwrap();
        assert_eq!(config.output.format, EmitFormat::Json);
        assert!(config.output.stats);
        assert!(config.diagnostics.snippets);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Config::from_toml("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_toml("[output]\ncolour = true\n").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output]\nstats = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.output.stats);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/kplc.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, DriverError::Config(_)));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
