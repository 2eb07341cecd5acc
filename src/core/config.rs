use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::detection::FailurePolicy;
use crate::error::{Result, ScanError};

pub const MAX_LINE_THICKNESS: u32 = 64;

/// Configuration for the qrscan scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title of the window showing the annotated image
    pub window_title: String,
    /// RGB colour of the drawn outlines
    pub line_color: [u8; 3],
    /// Outline thickness in pixels, between 1 and [`MAX_LINE_THICKNESS`]
    pub line_thickness: u32,
    /// Whether to show the annotated image at all
    pub display: bool,
    /// Handling of payloads that are not valid UTF-8
    pub policy: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Detected QR Code".to_string(),
            line_color: [0, 255, 0],
            line_thickness: 3,
            display: true,
            policy: FailurePolicy::Strict,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the platform config directory
    /// when no path is given
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit path cannot be read
    /// - The file is not valid JSON for this structure
    /// - The resulting values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// `config.json` in the platform config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "qrscan", "qrscan").map(|dirs| dirs.config_dir().join("config.json"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// # Errors
    ///
    /// Returns an error if the line thickness is out of range
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LINE_THICKNESS).contains(&self.line_thickness) {
            return Err(ScanError::Config(format!(
                "line_thickness must be between 1 and {}, got {}",
                MAX_LINE_THICKNESS, self.line_thickness
            )));
        }
        Ok(())
    }
}
