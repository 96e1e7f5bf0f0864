use crate::handles::{DEFAULT_RASTER_SCALE, SCALE_MAX_RATIO, SCALE_MIN_RATIO, SCALE_SNAP_STEP};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Manipulator tuning, loaded from JSON with per-field defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ManipulatorConfig {
    #[serde(default = "ManipulatorConfig::default_raster_scale")]
    pub raster_scale: f32,
    #[serde(default = "ManipulatorConfig::default_min_ratio")]
    pub min_ratio: f32,
    #[serde(default = "ManipulatorConfig::default_max_ratio")]
    pub max_ratio: f32,
    #[serde(default = "ManipulatorConfig::default_snap_step")]
    pub snap_step: f32,
}

impl Default for ManipulatorConfig {
    fn default() -> Self {
        Self {
            raster_scale: Self::default_raster_scale(),
            min_ratio: Self::default_min_ratio(),
            max_ratio: Self::default_max_ratio(),
            snap_step: Self::default_snap_step(),
        }
    }
}

impl ManipulatorConfig {
    fn default_raster_scale() -> f32 {
        DEFAULT_RASTER_SCALE
    }

    fn default_min_ratio() -> f32 {
        SCALE_MIN_RATIO
    }

    fn default_max_ratio() -> f32 {
        SCALE_MAX_RATIO
    }

    fn default_snap_step() -> f32 {
        SCALE_SNAP_STEP
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read manipulator config {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse manipulator config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("[gizmo] Config load error: {err:?}. Falling back to defaults.");
                Self::default()
            }
        }
    }
}
