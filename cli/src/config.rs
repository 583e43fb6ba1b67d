//! Configuration for the gormgen CLI
//!
//! Handles loading `gormgen.toml`. Generation options are flattened into the top
//! level of the file.

use gormgen_core::RenderOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "gormgen.toml";

/// File name used when every table goes into one file
pub const SINGLE_FILE_NAME: &str = "models.go";

// ============================================================================
// Configuration
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JSON schema description to read
    #[serde(default = "default_schema")]
    pub schema: PathBuf,

    /// Directory generated files are written into
    #[serde(default = "default_out")]
    pub out: PathBuf,

    /// Glob patterns selecting which tables to generate
    #[serde(default)]
    pub tables: Option<Filter>,

    /// Write every table into one file instead of one file per table
    #[serde(default)]
    pub single_file: bool,

    #[serde(flatten)]
    pub render: RenderOptions,
}

fn default_schema() -> PathBuf { PathBuf::from("schema.json") }
fn default_out() -> PathBuf { PathBuf::from("./models") }

/// Filter (single or multiple values)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    One(String),
    Many(Vec<String>),
}

impl Filter {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::One(s) => std::slice::from_ref(s).iter().map(String::as_str),
            Self::Many(v) => v.iter().map(String::as_str),
        }
    }

    pub fn display(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Load from default config file
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ParseFailure::Toml(e) => Error::Parse(path.into(), e),
            ParseFailure::Invalid(e) => e,
        })?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, ParseFailure> {
        let config: Self = toml::from_str(content).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    /// Check values serde cannot: the package name and table globs
    pub fn validate(&self) -> Result<(), Error> {
        if !is_go_identifier(&self.render.package) {
            return Err(Error::InvalidPackage(self.render.package.clone()));
        }
        self.table_patterns()?;
        Ok(())
    }

    /// Compiled table filters; empty when every table is selected
    pub fn table_patterns(&self) -> Result<Vec<glob::Pattern>, Error> {
        let Some(filter) = &self.tables else {
            return Ok(Vec::new());
        };
        filter
            .iter()
            .map(|p| glob::Pattern::new(p).map_err(|e| Error::InvalidPattern(p.into(), e)))
            .collect()
    }

    /// Whether a table passes the configured filters
    pub fn selects(patterns: &[glob::Pattern], table: &str) -> bool {
        patterns.is_empty() || patterns.iter().any(|p| p.matches(table))
    }

    /// Table filter display string
    pub fn tables_display(&self) -> String {
        self.tables
            .as_ref()
            .map(Filter::display)
            .unwrap_or_else(|| "*".to_string())
    }
}

fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[derive(Debug)]
enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(Error),
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid Go package name '{0}'")]
    InvalidPackage(String),

    #[error("invalid glob '{0}': {1}")]
    InvalidPattern(String, #[source] glob::PatternError),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
