//! Game settings and preferences
//!
//! Read from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Texture sizes used by the headless platform (a real renderer reports
/// the decoded image sizes instead)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSizes {
    pub ball: (u32, u32),
    pub hole: (u32, u32),
    pub obstacle: (u32, u32),
}

impl Default for TextureSizes {
    fn default() -> Self {
        Self {
            ball: (16, 16),
            hole: (24, 24),
            obstacle: (32, 32),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Window width in pixels
    pub field_width: u32,
    /// Window height in pixels
    pub field_height: u32,
    /// Number of obstacle tiles
    pub obstacle_count: usize,
    /// Course seed (random if unset)
    pub seed: Option<u64>,

    // === Timing ===
    /// Longest frame delta fed to the fixed-step accumulator (seconds)
    pub max_frame_dt: f64,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Headless ===
    pub textures: TextureSizes,
    /// Frames the headless binary runs before giving up
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            obstacle_count: OBSTACLE_COUNT,
            seed: None,

            max_frame_dt: MAX_FRAME_DT,

            master_volume: 1.0,
            muted: false,

            textures: TextureSizes::default(),
            max_frames: 60 * 120,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, otherwise (or on failure) use defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(SettingsError::InvalidValue {
                name: "field_width/field_height",
                reason: "field must be non-empty".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(SettingsError::InvalidValue {
                name: "master_volume",
                reason: format!("{} is outside 0.0..=1.0", self.master_volume),
            });
        }
        if self.obstacle_count > MAX_OBSTACLES {
            return Err(SettingsError::InvalidValue {
                name: "obstacle_count",
                reason: format!("{} is more than {}", self.obstacle_count, MAX_OBSTACLES),
            });
        }
        if !(self.max_frame_dt > 0.0) {
            return Err(SettingsError::InvalidValue {
                name: "max_frame_dt",
                reason: format!("{} must be positive", self.max_frame_dt),
            });
        }
        Ok(())
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
