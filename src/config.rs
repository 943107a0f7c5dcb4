//! Render settings loaded from `sqlout.toml`.
//!
//! ```toml
//! dialect = "h2"
//! uppercase = true
//! parameterized = false
//! indent = "    "
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{RenderError, RenderResult};

/// Project-local config file name.
pub const CONFIG_FILE: &str = "sqlout.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub dialect: Dialect,
    /// Emit keywords in upper case.
    pub uppercase: bool,
    /// Replace literals with `?` placeholders.
    pub parameterized: bool,
    /// One indentation level.
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Generic,
            uppercase: true,
            parameterized: false,
            indent: "\t".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(content: &str) -> RenderResult<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), dialect = %config.dialect, "loaded config");
        Ok(config)
    }

    /// First of `./sqlout.toml` and `<config dir>/sqlout/config.toml` that exists, else defaults.
    pub fn discover() -> RenderResult<Self> {
        for path in Self::search_paths() {
            if path.is_file() {
                return Self::load(&path);
            }
        }
        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqlout").join("config.toml"));
        }
        paths
    }

    fn validate(&self) -> RenderResult<()> {
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(RenderError::config("indent may only contain spaces and tabs"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = RenderConfig::from_toml_str("dialect = \"PostgreSQL\"\nuppercase = false").unwrap();
        assert_eq!(config.dialect, Dialect::Postgres);
        assert!(!config.uppercase);
        assert_eq!(config.indent, "\t");
    }

    #[test]
    fn test_unknown_dialect_is_rejected() {
        let err = RenderConfig::from_toml_str("dialect = \"cobol\"").unwrap_err();
        assert!(matches!(err, RenderError::Toml(_)));
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn test_bad_indent() {
        let err = RenderConfig::from_toml_str("indent = \"--\"").unwrap_err();
        assert!(matches!(err, RenderError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load("/nonexistent/sqlout.toml").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_search_paths_start_local() {
        assert_eq!(RenderConfig::search_paths()[0], PathBuf::from("sqlout.toml"));
    }
}
