//! User settings, read from an optional JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lumen_renderer::{CameraSettings, ImageFormat, RenderConfig, SweepConfig};
use serde::Deserialize;

use crate::scenes::SceneKind;

/// Where and how frames are written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    /// File name stem; the frame index and extension are appended
    pub prefix: String,
    pub format: ImageFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            prefix: "raytrace".to_string(),
            format: ImageFormat::Png,
        }
    }
}

impl OutputConfig {
    /// Path of frame `index`, e.g. `./raytrace3.png`.
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.directory
            .join(format!("{}{}.{}", self.prefix, index, self.format.extension()))
    }
}

/// Everything the binary can be configured with.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render: RenderConfig,
    pub camera: CameraSettings,
    pub sweep: SweepConfig,
    pub output: OutputConfig,
    pub scene: SceneKind,
    /// Seed for the random scene layout
    pub scene_seed: u64,
}

impl Settings {
    /// Parse settings from JSON text; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text).context("Invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("In settings file {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.render.validate()?;
        self.sweep.validate()?;
        Ok(())
    }
}
