//! Configuration resolution for rumo-cli
//!
//! Scoring service base URL resolved with the priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (RUMO_SCORING_URL)
//! 3. TOML config file (~/.config/rumo/config.toml)
//! 4. Compiled default (fallback)
//!
//! Missing or unparsable config files never cause termination; resolution
//! degrades to the next tier with a warning.

use rumo_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Compiled default scoring service base URL
pub const DEFAULT_SCORING_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the scoring URL
pub const ENV_SCORING_URL: &str = "RUMO_SCORING_URL";

/// TOML config file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Scoring service base URL
    pub scoring_url: Option<String>,
}

/// Default configuration file path for the platform
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rumo").join("config.toml"))
}

/// Load and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
}

/// Resolve the scoring service base URL
///
/// Priority: CLI argument → environment → TOML → compiled default.
pub fn resolve_scoring_url(cli_arg: Option<&str>, toml_path: Option<&Path>) -> String {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        if !url.trim().is_empty() {
            info!("Scoring URL loaded from command line");
            return normalize_url(url);
        }
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(ENV_SCORING_URL) {
        if !url.trim().is_empty() {
            info!("Scoring URL loaded from environment variable");
            return normalize_url(&url);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = toml_path {
        if path.exists() {
            match load_toml_config(path) {
                Ok(config) => {
                    if let Some(url) = config.scoring_url {
                        if !url.trim().is_empty() {
                            info!("Scoring URL loaded from TOML config");
                            return normalize_url(&url);
                        }
                    }
                }
                Err(e) => {
                    warn!("Ignoring unusable config file {}: {}", path.display(), e);
                }
            }
        }
    }

    // Priority 4: Compiled default
    info!("Scoring URL using compiled default");
    DEFAULT_SCORING_URL.to_string()
}

/// Strip trailing slashes so path joining stays predictable
fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
