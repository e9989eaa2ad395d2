//! Application Configuration
//!
//! User settings stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Field validation settings
    pub fields: FieldSettings,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (overridden by `RUST_LOG`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Patterns each line of an extracted field is checked against
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// Item name: letters, digits and inner spaces
    pub name_pattern: String,
    /// Quantity: digits and spaces
    pub quantity_pattern: String,
    /// Price: `R` / `Rp` prefix followed by digits
    pub price_pattern: String,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            name_pattern: r"^[A-Za-z0-9]*[A-Za-z0-9][A-Za-z0-9 ]*$".to_string(),
            quantity_pattern: r"^[0-9]*[0-9][0-9 ]*$".to_string(),
            price_pattern: r"^[R][p]*[0-9][0-9]*$".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(config)
}

/// Pick the configuration for a run.
///
/// An explicit path must load. Otherwise the default location is used when a
/// file exists there, and built-in defaults when it doesn't. A file that
/// exists but fails to parse is an error, never a silent fallback.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>)> {
    let path = match (explicit, default_path) {
        (Some(path), _) => path,
        (None, Some(path)) if path.exists() => path,
        _ => return Ok((AppConfig::default(), None)),
    };

    Ok((load_config(path)?, Some(path.to_path_buf())))
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
