//! Application configuration
//!
//! TOML config for the extraction endpoint and hall defaults, plus the data
//! directory used for the persistent database.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use avasa_core::{FillDirection, HallLayout, SeatingPolicy, SpecialSide};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration loaded from TOML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,
    #[serde(default)]
    pub hall: HallConfig,
}

/// Extraction service endpoint section
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default = "default_extractor_addr")]
    pub addr: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            addr: default_extractor_addr(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_extractor_addr() -> String {
    format!("127.0.0.1:{}", avasa_extract::DEFAULT_PORT)
}

fn default_timeout_secs() -> u64 {
    avasa_extract::DEFAULT_TIMEOUT_SECS
}

/// Hall defaults section. Omitting rows/cols lets each ingestion auto-size
/// the grid for the batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HallConfig {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub cols: Option<usize>,
    #[serde(default)]
    pub special_side: SpecialSide,
    #[serde(default)]
    pub special_fill: FillDirection,
}

impl HallConfig {
    pub fn policy(&self) -> SeatingPolicy {
        SeatingPolicy {
            special_side: self.special_side,
            special_fill: self.special_fill,
        }
    }

    /// Operator-fixed dimensions, when both are present.
    pub fn fixed_layout(&self) -> Option<HallLayout> {
        match (self.rows, self.cols) {
            (Some(rows), Some(cols)) => Some(HallLayout::new(rows, cols)),
            _ => None,
        }
    }
}

impl AppConfig {
    /// Load from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load from a TOML file, falling back to defaults when it is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => {
                tracing::info!("No config file; using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Config unreadable; using defaults");
                Self::default()
            }
        }
    }
}

/// Directory for the persistent database.
pub fn data_path() -> std::io::Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "avasa", "avasa").ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    Ok(dirs.data_dir().to_path_buf())
}
