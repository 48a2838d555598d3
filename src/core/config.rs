//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dictum/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DictumConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Accent color for focused borders and controls. Any ratatui color
    /// name ("cyan", "light magenta") or "#RRGGBB".
    pub accent: Option<String>,
    /// Show the key hint line at the bottom of the screen.
    pub show_hints: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ACCENT: &str = "cyan";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Accent stays a string here; the TUI layer parses it into a color so the
/// core never depends on rendering types.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub accent: String,
    pub show_hints: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dictum/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dictum").join("config.toml"))
}

/// Load config from `~/.dictum/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DictumConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DictumConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DictumConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Split out from [`load_config`] so
/// tests can point it at a scratch directory.
pub fn load_config_from(path: &Path) -> Result<DictumConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DictumConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DictumConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Dictum Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [ui]
# accent = "cyan"          # Any ratatui color name or "#RRGGBB"
# show_hints = true        # Key hint line at the bottom of the screen
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_accent` is from the `--accent` flag (None = not specified).
pub fn resolve(config: &DictumConfig, cli_accent: Option<&str>) -> ResolvedConfig {
    // Accent: CLI → env → config → default
    let accent = cli_accent
        .map(|s| s.to_string())
        .or_else(|| std::env::var("DICTUM_ACCENT").ok())
        .or_else(|| config.ui.accent.clone())
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string());

    ResolvedConfig {
        accent,
        show_hints: config.ui.show_hints.unwrap_or(true),
    }
}
