//! Runtime configuration for the fetch-and-write pipeline.
//!
//! Values come from defaults, then an optional TOML file, then command-line
//! flags ([`ConfigOverrides`]). Extraction itself is configured per source
//! through [`ExtractorConfig`](crate::ExtractorConfig).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// User-Agent sent with page requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Pipeline configuration.
///
/// # Example
///
/// ```rust
/// use rs_index_tickers::Config;
///
/// let config = Config::from_toml_str("output_dir = \"out\"")?;
/// assert_eq!(config.output_dir.to_str(), Some("out"));
/// assert_eq!(config.timeout_secs, 30);
/// # Ok::<(), rs_index_tickers::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory receiving the text and JSON lists.
    ///
    /// Default: `indices`
    pub output_dir: PathBuf,

    /// User-Agent header for page requests.
    ///
    /// Default: `Mozilla/5.0`
    pub user_agent: String,

    /// Whole-request timeout in seconds.
    ///
    /// Default: `30`
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("indices"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Values given on the command line; each one set beats the file and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Defaults, then `file` if given, then `overrides`.
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    /// Replace every field that `overrides` sets.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        let ConfigOverrides {
            output_dir,
            user_agent,
            timeout_secs,
        } = overrides;
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(agent) = user_agent {
            self.user_agent = agent;
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("indices"));
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").ok(), Some(Config::default()));
    }

    #[test]
    fn file_values_override_defaults() {
        let config = Config::from_toml_str("user_agent = \"tickers/1.0\"\ntimeout_secs = 5\n")
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(config.user_agent, "tickers/1.0");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.output_dir, PathBuf::from("indices"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("outdir = \"x\"").err();
        assert!(matches!(err, Some(Error::Config(_))));
    }

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap_or_else(|e| panic!("tempfile: {e}"));
        fs::write(file.path(), text).unwrap_or_else(|e| panic!("write: {e}"));
        file
    }

    #[test]
    fn resolve_without_file_or_flags_is_default() {
        let config = Config::resolve(None, ConfigOverrides::default())
            .unwrap_or_else(|e| panic!("resolve: {e}"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_value_beats_default() {
        let file = write_config("output_dir = \"from-file\"\n");
        let config = Config::resolve(Some(file.path()), ConfigOverrides::default())
            .unwrap_or_else(|e| panic!("resolve: {e}"));
        assert_eq!(config.output_dir, PathBuf::from("from-file"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn flag_beats_file_value() {
        let file = write_config("output_dir = \"from-file\"\ntimeout_secs = 5\n");
        let overrides = ConfigOverrides {
            output_dir: Some(PathBuf::from("from-flag")),
            ..ConfigOverrides::default()
        };
        let config = Config::resolve(Some(file.path()), overrides)
            .unwrap_or_else(|e| panic!("resolve: {e}"));
        assert_eq!(config.output_dir, PathBuf::from("from-flag"));
        // unset flags leave file values alone
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn with_overrides_replaces_every_set_field() {
        let config = Config::default().with_overrides(ConfigOverrides {
            output_dir: Some(PathBuf::from("out")),
            user_agent: Some("agent/2".to_string()),
            timeout_secs: Some(1),
        });
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.user_agent, "agent/2");
        assert_eq!(config.timeout_secs, 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load(Path::new("/nonexistent/tickers.toml")).err();
        assert!(matches!(err, Some(Error::Io { .. })));
    }
}
