//! Configuration settings
//!
//! Settings are loaded from an optional `quire.toml`:
//!
//! ```toml
//! [highlight]
//! viewport_offset = 0.22
//! duration_ms = 3000
//! background = "yellow"
//! font_size = "x-large"
//!
//! [upload]
//! max_document_bytes = 10485760
//! max_image_bytes = 10485760
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::highlight::HighlightSettings;
use crate::upload::UploadSettings;

/// Default configuration file name
pub const CONFIG_FILE: &str = "quire.toml";

/// Errors loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Footnote highlight behaviour
    pub highlight: HighlightSettings,
    /// Upload limits
    pub upload: UploadSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load settings from a file if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
