//! Game settings and preferences
//!
//! Loaded from an optional JSON file; missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Minimum swipe travel (pixels) before a touch counts as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 30.0;

/// Why a settings file could not be used
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed run seed; a fresh one is chosen per session when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === Touch ===
    /// Swipe recognition threshold in pixels
    pub swipe_threshold: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            // Touch
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, validating and clamping values
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validated()
    }

    /// Load settings from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if a path is given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from_path(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject unusable values and clamp volumes into range
    pub fn validated(self) -> Result<Self, SettingsError> {
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "swipe_threshold must be positive, got {}",
                self.swipe_threshold
            )));
        }
        Ok(self.sanitized())
    }

    /// Clamp volumes to [0, 1]; NaN volumes become silent
    pub fn sanitized(mut self) -> Self {
        for vol in [
            &mut self.master_volume,
            &mut self.sfx_volume,
            &mut self.music_volume,
        ] {
            *vol = if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) };
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
    }

    #[test]
    fn volumes_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "sfx_volume": -1.0 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn bad_threshold_is_rejected() {
        let err = Settings::from_json(r#"{ "swipe_threshold": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/settings.json");
        assert!(matches!(
            Settings::load_from_path(path),
            Err(SettingsError::Io { .. })
        ));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
