//! Game settings and preferences
//!
//! Presentation only: nothing here changes gameplay constants. Read from JSON
//! (the canvas `data-settings` attribute in the browser, an optional file
//! natively). Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("master_volume must be within 0..=1, got {0}")]
    Volume(f32),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw collision radii and facing markers
    pub debug_overlay: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Smear frames together as the player loses health
    pub motion_blur: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Fixed run seed; a fresh one is picked when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_overlay: false,
            show_fps: true,
            motion_blur: true,
            master_volume: 1.0,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(SettingsError::Volume(self.master_volume));
        }
        Ok(())
    }

    /// Parse `json` if given, falling back to defaults (with a warning) on
    /// any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Blur strength to apply for a player blur intensity
    pub fn effective_motion_blur(&self, intensity: f32) -> f32 {
        if self.motion_blur {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let s = Settings::from_json(r#"{"debug_overlay": true}"#).unwrap();
        assert!(s.debug_overlay);
        assert!(s.show_fps);
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_round_trip_with_seed() {
        let s = Settings {
            seed: Some(42),
            master_volume: 0.5,
            ..Default::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            Settings::from_json(r#"{"master_volume": 3.0}"#),
            Err(SettingsError::Volume(_))
        ));
        assert!(matches!(Settings::from_json("{"), Err(SettingsError::Parse(_))));
        assert!(matches!(
            Settings::from_file("/definitely/not/here.json"),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        assert_eq!(Settings::load_or_default(None), Settings::default());
        assert_eq!(Settings::load_or_default(Some("nonsense")), Settings::default());
        assert!(!Settings::load_or_default(Some(r#"{"show_fps": false}"#)).show_fps);
    }

    #[test]
    fn test_motion_blur_toggle() {
        let mut s = Settings::default();
        assert_eq!(s.effective_motion_blur(0.4), 0.4);
        s.motion_blur = false;
        assert_eq!(s.effective_motion_blur(0.4), 0.0);
    }
}
