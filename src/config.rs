//! Game configuration
//!
//! Everything that used to be a scattered constant (screen size, palette,
//! player tuning, frame cap) lives in one `Config` struct that gets threaded
//! into the loop driver. An optional `blockdrop.ron` next to the binary can
//! override the defaults; a missing file is normal and a broken file falls
//! back to defaults with a warning.

use log::{info, warn};
use macroquad::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Config file read from the working directory (if present)
pub const CONFIG_FILE: &str = "blockdrop.ron";

/// An RGB color triple as it appears in the config file.
///
/// macroquad's `Color` has no serde impls, so colors are stored as plain
/// 8-bit channels and converted at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);

    /// Convert to a macroquad color (fully opaque)
    pub fn to_color(self) -> Color {
        Color::from_rgba(self.0, self.1, self.2, 255)
    }
}

/// Tuning for the keyboard-driven player rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting position (screen space, origin top-left)
    pub start_x: f32,
    pub start_y: f32,
    /// Rectangle size in pixels (must be positive)
    pub width: f32,
    pub height: f32,
    /// Movement per frame per held direction, in pixels
    pub speed: f32,
    pub color: Rgb,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_x: 400.0,
            start_y: 300.0,
            width: 50.0,
            height: 50.0,
            speed: 5.0,
            color: Rgb::BLUE,
        }
    }
}

/// Top-level configuration passed into the loop driver at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window/playfield dimensions in pixels
    pub screen_width: f32,
    pub screen_height: f32,
    /// Color the surface is cleared to each frame
    pub background: Rgb,
    pub player: PlayerConfig,
    /// Frame cap in frames per second
    pub target_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            background: Rgb::WHITE,
            player: PlayerConfig::default(),
            target_fps: 60,
        }
    }
}

impl Config {
    /// Load a config from a RON file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `blockdrop.ron` from the working directory, falling back to
    /// defaults. A missing file is the normal case; a file that exists but
    /// fails to load is logged and ignored (the game has no error UI, so a
    /// bad config must never be fatal).
    pub fn load_or_default() -> Config {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            info!("no {} found, using defaults", CONFIG_FILE);
            return Config::default();
        }
        match Config::load(path) {
            Ok(config) => {
                info!("loaded config from {}", CONFIG_FILE);
                config
            }
            Err(e) => {
                warn!("failed to load {}: {}, using defaults", CONFIG_FILE, e);
                Config::default()
            }
        }
    }

    /// Target frame time in seconds
    pub fn frame_time(&self) -> f64 {
        1.0 / f64::from(self.target_fps)
    }
}

/// Config loading error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Could not read the file
    Io(String),
    /// File read but not valid RON for a `Config`
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.screen_width, 800.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.background, Rgb::WHITE);
        assert_eq!(config.player.start_x, 400.0);
        assert_eq!(config.player.start_y, 300.0);
        assert_eq!(config.player.width, 50.0);
        assert_eq!(config.player.speed, 5.0);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_frame_time_60fps() {
        let config = Config::default();
        assert!((config.frame_time() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = Config::default();
        config.player.speed = 8.0;
        config.background = Rgb(10, 20, 30);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let text = ron::ser::to_string_pretty(&config, Default::default()).unwrap();
        std::fs::write(&path, text).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        // Fields absent from the file fall back to their defaults
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(target_fps: 30)").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.target_fps, 30);
        assert_eq!(loaded.screen_width, 800.0);
        assert_eq!(loaded.player, PlayerConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "not ron at all {{{").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rgb_to_color() {
        let c = Rgb(255, 0, 0).to_color();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }
}
