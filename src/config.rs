//! Game configuration.
//!
//! Defaults reproduce the classic 800x600 layout. A JSON file named by the
//! `RBRICK_CONFIG` environment variable can override any subset of fields.

use crate::items::Color;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;

/// Environment variable holding the path of an optional JSON config file
pub const CONFIG_ENV: &str = "RBRICK_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Window / arena ===
    pub title: String,
    pub arena_width: f32,
    pub arena_height: f32,
    pub background: Color,
    /// Optional frame rate cap on top of vsync pacing
    pub frame_cap: Option<u32>,

    // === Ball ===
    pub ball_radius: f32,
    /// Displacement per tick on each axis
    pub ball_speed: f32,
    pub ball_color: Color,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Displacement per tick while a direction is held
    pub paddle_speed: f32,
    /// Distance from the bottom of the arena to the paddle's top edge
    pub paddle_bottom_offset: f32,
    /// Slack kept between the paddle and a side wall before moving is refused
    pub paddle_edge_epsilon: f32,
    pub paddle_color: Color,

    // === Blocks ===
    pub block_rows: usize,
    pub block_columns: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_row_gap: f32,
    /// Number of empty row pitches above the first block row
    pub block_top_rows: u32,
    pub block_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::from("Arkinoid"),
            arena_width: 800.0,
            arena_height: 600.0,
            background: Color::BLACK,
            frame_cap: None,

            ball_radius: 10.0,
            ball_speed: 3.0,
            ball_color: Color::RED,

            paddle_width: 60.0,
            paddle_height: 20.0,
            paddle_speed: 5.0,
            paddle_bottom_offset: 50.0,
            paddle_edge_epsilon: 1.0,
            paddle_color: Color::BLUE,

            block_rows: 4,
            block_columns: 11,
            block_width: 60.0,
            block_height: 20.0,
            block_row_gap: 6.0,
            block_top_rows: 2,
            block_color: Color::BLUE,
        }
    }
}

impl GameConfig {
    /// Load the config named by `RBRICK_CONFIG`, or the defaults when unset.
    pub fn load() -> Result<GameConfig, ConfigError> {
        Self::load_from(std::env::var_os(CONFIG_ENV))
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_from(path: Option<OsString>) -> Result<GameConfig, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::from_file(Path::new(&path))?;
                log::info!("Loaded config from {}", Path::new(&path).display());
                Ok(config)
            }
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<GameConfig, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
        ];
        for (name, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.frame_cap == Some(0) {
            return Err(ConfigError::Invalid(String::from(
                "frame_cap must be at least 1 when set",
            )));
        }
        if self.block_rows == 0 || self.block_columns == 0 {
            return Err(ConfigError::Invalid(String::from(
                "block grid must have at least one row and column",
            )));
        }
        if !self.block_row_gap.is_finite() || self.block_row_gap < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "block_row_gap must be zero or positive, got {}",
                self.block_row_gap
            )));
        }
        if !self.paddle_edge_epsilon.is_finite() || self.paddle_edge_epsilon < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "paddle_edge_epsilon must be zero or positive, got {}",
                self.paddle_edge_epsilon
            )));
        }
        if self.ball_radius * 2.0 >= self.arena_width.min(self.arena_height) {
            return Err(ConfigError::Invalid(String::from(
                "ball does not fit inside the arena",
            )));
        }
        // The paddle spawns with its left edge at the arena's horizontal center
        if self.arena_width / 2.0 > self.paddle_max_x() {
            return Err(ConfigError::Invalid(format!(
                "paddle of width {} does not fit right of the arena center",
                self.paddle_width
            )));
        }
        if !(self.paddle_height <= self.paddle_bottom_offset
            && self.paddle_bottom_offset <= self.arena_height)
        {
            return Err(ConfigError::Invalid(format!(
                "paddle_bottom_offset must be within [{}, {}], got {}",
                self.paddle_height, self.arena_height, self.paddle_bottom_offset
            )));
        }
        if self.block_gap() < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{} blocks of width {} do not fit in an arena of width {}",
                self.block_columns, self.block_width, self.arena_width
            )));
        }
        let grid_bottom =
            self.block_top_margin() + self.block_rows as f32 * self.block_row_pitch();
        if grid_bottom > self.arena_height {
            return Err(ConfigError::Invalid(format!(
                "{} block rows reach y={} below an arena of height {}",
                self.block_rows, grid_bottom, self.arena_height
            )));
        }
        Ok(())
    }

    /// Horizontal gap between blocks, also used as the left margin.
    pub fn block_gap(&self) -> f32 {
        (self.arena_width / self.block_columns as f32).floor() - self.block_width
    }

    pub fn block_row_pitch(&self) -> f32 {
        self.block_height + self.block_row_gap
    }

    pub fn block_top_margin(&self) -> f32 {
        self.block_top_rows as f32 * self.block_row_pitch()
    }

    /// Rightmost x the paddle's left edge may reach.
    pub fn paddle_max_x(&self) -> f32 {
        self.arena_width - self.paddle_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.block_gap(), 12.0);
        assert_eq!(config.block_row_pitch(), 26.0);
        assert_eq!(config.block_top_margin(), 52.0);
        assert_eq!(config.paddle_max_x(), 740.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "ball_speed": 4.0, "block_rows": 2 }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.ball_speed, 4.0);
        assert_eq!(config.block_rows, 2);
        assert_eq!(config.arena_width, 800.0);
        assert_eq!(config.title, "Arkinoid");
    }

    #[test]
    fn test_json_round_trip_of_colors() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        let back = GameConfig::from_json(&json).unwrap();
        assert_eq!(back, GameConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = GameConfig {
            ball_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            arena_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            block_columns: 20,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(GameConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_block_grid_must_fit_arena_height() {
        let config = GameConfig {
            block_rows: usize::MAX / 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        // 2 margin rows + 21 rows of pitch 26 end at 598, one more row does not fit
        let config = GameConfig {
            block_rows: 21,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let config = GameConfig {
            block_rows: 22,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            block_row_gap: -30.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_paddle_must_spawn_inside_arena() {
        let config = GameConfig {
            paddle_width: 400.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = GameConfig {
            paddle_width: 500.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_paddle_vertical_offset_and_epsilon_checked() {
        for offset in [-100.0, 10.0, 601.0, f32::NAN] {
            let config = GameConfig {
                paddle_bottom_offset: offset,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "offset {offset} accepted");
        }
        for epsilon in [-1.0, f32::NAN, f32::INFINITY] {
            let config = GameConfig {
                paddle_edge_epsilon: epsilon,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "epsilon {epsilon} accepted");
        }
        let config = GameConfig {
            paddle_edge_epsilon: 0.0,
            paddle_bottom_offset: 20.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let name = format!("rbrick-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, r#"{ "title": "Test", "paddle_speed": 8.0 }"#).unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!(config.paddle_speed, 8.0);
        assert_eq!(config.ball_speed, 3.0);

        let loaded = GameConfig::load_from(Some(path.clone().into_os_string())).unwrap();
        assert_eq!(loaded, config);

        fs::remove_file(&path).unwrap();
        assert!(matches!(GameConfig::from_file(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(GameConfig::load_from(None).unwrap(), GameConfig::default());
    }
}
