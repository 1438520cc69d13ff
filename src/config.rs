//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-glance.toml` in current directory
//! 4. `~/.config/sql-glance/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [format]
//! indent = "    "
//! uppercase = true
//! max_line_length = 100
//! lines_between_clauses = 0
//!
//! [output]
//! format = "json"              # text, json, yaml
//! colored = false
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_GLANCE_INDENT` | Indentation unit |
//! | `SQL_GLANCE_UPPERCASE` | `true`/`false` |
//! | `SQL_GLANCE_MAX_LINE_LENGTH` | Wrap limit, `0` disables |
//! | `SQL_GLANCE_LINES_BETWEEN_CLAUSES` | Blank lines before clauses |

use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr
};

use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{AppResult, config_error},
    format::FormatOverrides
};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub format: FormatOverrides,
    #[serde(default)]
    pub output: OutputConfig
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format name: text, json or yaml
    pub format:  Option<String>,
    pub colored: Option<bool>
}

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".sql-glance.toml";

impl OutputConfig {
    /// Layer `other` on top of `self`; fields set in `other` win
    #[must_use]
    pub fn or_from(self, other: OutputConfig) -> Self {
        Self {
            format:  other.format.or(self.format),
            colored: other.colored.or(self.colored)
        }
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| config_error(format!("Invalid value for {}: '{}'", name, value)))
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// Layer `other` on top of `self` field by field; fields set in `other`
    /// win
    #[must_use]
    pub fn or_from(self, other: Config) -> Self {
        Self {
            format: self.format.or_from(other.format),
            output: self.output.or_from(other.output)
        }
    }

    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-glance.toml)
    /// 3. Config file in home directory (~/.config/sql-glance/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let home = env::var_os("HOME").map(PathBuf::from);
        Self::load_from(home.as_deref(), Path::new("."), |name| env::var(name).ok())
    }

    /// Load with explicit home and working directories
    ///
    /// Each file only overrides the fields it sets.
    pub fn load_from<F>(home: Option<&Path>, work_dir: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();

        if let Some(home) = home {
            let home_config = home.join(".config").join("sql-glance").join("config.toml");
            if home_config.exists() {
                config = config.or_from(Self::from_file(&home_config)?);
            }
        }

        let local_config = work_dir.join(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            config = config.or_from(Self::from_file(&local_config)?);
        }

        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Override fields from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(indent) = lookup("SQL_GLANCE_INDENT") {
            self.format.indent = Some(indent);
        }

        if let Some(value) = lookup("SQL_GLANCE_UPPERCASE") {
            self.format.uppercase = Some(parse_env("SQL_GLANCE_UPPERCASE", &value)?);
        }

        if let Some(value) = lookup("SQL_GLANCE_MAX_LINE_LENGTH") {
            self.format.max_line_length = Some(parse_env("SQL_GLANCE_MAX_LINE_LENGTH", &value)?);
        }

        if let Some(value) = lookup("SQL_GLANCE_LINES_BETWEEN_CLAUSES") {
            self.format.lines_between_clauses =
                Some(parse_env("SQL_GLANCE_LINES_BETWEEN_CLAUSES", &value)?);
        }

        Ok(())
    }
}
