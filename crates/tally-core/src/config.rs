//! Import configuration
//!
//! Describes how a bank export is laid out: delimiter, header row, date
//! format and which column holds each field.
//!
//! ## Configuration Resolution
//!
//! 1. Explicit path (`--config`), if it exists
//! 2. Override in data dir (~/.local/share/tally/config/import.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ledger::DEFAULT_DATE_FORMAT;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/import.toml");

/// Zero-based column positions of the four fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub description: usize,
    pub debit: usize,
    pub credit: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: 0,
            description: 1,
            debit: 2,
            credit: 3,
        }
    }
}

/// How to read rows out of a CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub delimiter: u8,
    pub has_headers: bool,
    pub date_format: String,
    pub columns: ColumnMap,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            columns: ColumnMap::default(),
        }
    }
}

impl ImportConfig {
    /// Load config from the override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load config from `path` if it exists, falling back like [`ImportConfig::load`]
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content, layered over the built-in defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("import.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<ImportConfig> {
    let path = override_path
        .map(Path::to_path_buf)
        .filter(|p| p.exists())
        .or_else(|| default_config_path().filter(|p| p.exists()));

    let content = match path {
        Some(path) => {
            debug!("Loading import config from {}", path.display());
            fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
        }
        None => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    csv: Option<RawCsv>,
    columns: Option<RawColumns>,
}

#[derive(Debug, Deserialize)]
struct RawCsv {
    delimiter: Option<String>,
    has_headers: Option<bool>,
    date_format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawColumns {
    date: Option<usize>,
    description: Option<usize>,
    debit: Option<usize>,
    credit: Option<usize>,
}

fn parse_config(content: &str) -> Result<ImportConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = ImportConfig::default();

    if let Some(csv) = raw.csv {
        if let Some(delimiter) = csv.delimiter {
            config.delimiter = parse_delimiter(&delimiter)?;
        }
        if let Some(has_headers) = csv.has_headers {
            config.has_headers = has_headers;
        }
        if let Some(date_format) = csv.date_format {
            config.date_format = date_format;
        }
    }

    if let Some(columns) = raw.columns {
        let defaults = config.columns;
        config.columns = ColumnMap {
            date: columns.date.unwrap_or(defaults.date),
            description: columns.description.unwrap_or(defaults.description),
            debit: columns.debit.unwrap_or(defaults.debit),
            credit: columns.credit.unwrap_or(defaults.credit),
        };
    }

    Ok(config)
}

fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if s == "\\t" => Ok(b'\t'),
        _ => Err(Error::Config(format!(
            "Delimiter must be a single ASCII character, got {:?}",
            s
        ))),
    }
}
