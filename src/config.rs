//! Decoration settings
//!
//! Optional RON file (`glimmer.ron` next to the binary) tuning the overlay
//! and the entrance sequence. A missing file is normal and yields defaults;
//! a malformed file is logged and also yields defaults, so the screen never
//! fails to come up over a bad config.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::fx::EngineParams;

/// Error type for config load/save
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// Everything tunable about the decoration layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    /// Master switch for the particle overlay
    pub overlay_enabled: bool,
    /// Forces the motion preference; None defers to the environment
    pub reduced_motion: Option<bool>,

    /// Probability of one ambient particle per frame
    pub ambient_rate: f32,
    /// Per-frame velocity multiplier
    pub drag: f32,
    /// Spawn velocity components are uniform in [-speed, speed)
    pub speed: f32,
    pub decay_min: f32,
    pub decay_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub hue_min: f32,
    pub hue_max: f32,

    /// Burst size for click feedback
    pub click_burst: usize,
    /// Burst size for the entrance explosion
    pub entrance_burst: usize,
    /// Seconds before the entrance explosion fires
    pub settle_delay: f32,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            overlay_enabled: true,
            reduced_motion: None,
            ambient_rate: 0.03,
            drag: 0.98,
            speed: 3.0,
            decay_min: 0.01,
            decay_max: 0.03,
            size_min: 2.0,
            size_max: 6.0,
            hue_min: 160.0,
            hue_max: 220.0,
            click_burst: 80,
            entrance_burst: 100,
            settle_delay: 1.5,
        }
    }
}

impl DecorConfig {
    /// Engine tunables derived from the config. The ambient rate is a
    /// probability, so it gets clamped here rather than trusted.
    pub fn engine_params(&self) -> EngineParams {
        EngineParams {
            drag: self.drag,
            ambient_rate: self.ambient_rate.clamp(0.0, 1.0),
            speed: self.speed,
            decay_min: self.decay_min,
            decay_max: self.decay_max,
            size_min: self.size_min,
            size_max: self.size_max,
            hue_min: self.hue_min,
            hue_max: self.hue_max,
        }
    }
}

/// Load a config file
pub fn load(path: &Path) -> Result<DecorConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config = ron::from_str(&contents)?;
    Ok(config)
}

/// Save a config file (pretty-printed RON)
#[allow(dead_code)] // round-trip coverage; the app itself only reads
pub fn save(path: &Path, config: &DecorConfig) -> Result<(), ConfigError> {
    let contents = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load the config if present, defaults otherwise. A missing file is the
/// common case and stays quiet; a broken file gets logged.
pub fn load_or_default(path: &Path) -> DecorConfig {
    if !path.exists() {
        return DecorConfig::default();
    }
    match load(path) {
        Ok(config) => {
            println!("Loaded decoration config from {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, using defaults", path.display(), e);
            DecorConfig::default()
        }
    }
}
