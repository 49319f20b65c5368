//! Run configuration
//!
//! Validated once at startup; the loop never sees an invalid value.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::BOUNDS_REFRESH_SECS;

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Right,
    Left,
    Up,
    Down,
    Circular,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Circular => "circular",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "right" => Some(Direction::Right),
            "left" => Some(Direction::Left),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "circular" | "circle" => Some(Direction::Circular),
            _ => None,
        }
    }

    /// Unit direction vector in screen coordinates (y grows downward).
    /// `None` for circular mode, which is angle-driven rather than linear.
    pub fn vector(&self) -> Option<Vec2> {
        match self {
            Direction::Right => Some(Vec2::X),
            Direction::Left => Some(Vec2::NEG_X),
            Direction::Up => Some(Vec2::NEG_Y),
            Direction::Down => Some(Vec2::Y),
            Direction::Circular => None,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_str(s).ok_or_else(|| ConfigError::UnknownDirection(s.to_string()))
    }
}

/// Configuration errors, surfaced before the loop starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown direction '{0}' (expected right, left, up, down, or circular)")]
    UnknownDirection(String),
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Run configuration
///
/// Immutable after validation. Defaults mirror the classic tool:
/// move right 5 px every 0.1 s, click pair every 2 s, no window constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Movement direction
    pub direction: Direction,
    /// Pixels to move per tick
    pub move_distance: f32,
    /// Seconds between click pairs
    pub click_interval: f64,
    /// Seconds between movements (one tick)
    pub move_interval: f64,
    /// Constrain movement to the first visible window whose title contains
    /// this text (case-insensitive). `None` means unconstrained.
    pub target_window: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            move_distance: 5.0,
            click_interval: 2.0,
            move_interval: 0.1,
            target_window: None,
        }
    }
}

impl Config {
    /// Check every field once, before the loop ever runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::NonPositive { field, value })
            }
        }

        positive("move_distance", self.move_distance as f64)?;
        positive("click_interval", self.click_interval)?;
        positive("move_interval", self.move_interval)?;
        Ok(())
    }

    /// Parse from a JSON string and validate
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file and validate
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Ticks between click pairs (click interval ÷ move interval, at least 1)
    pub fn ticks_per_click(&self) -> u64 {
        (self.click_interval / self.move_interval).round().max(1.0) as u64
    }

    /// Ticks between target-window bounds re-queries
    pub fn bounds_refresh_ticks(&self) -> u64 {
        (BOUNDS_REFRESH_SECS / self.move_interval).round().max(1.0) as u64
    }

    /// Sleep duration between ticks
    pub fn move_interval_duration(&self) -> Duration {
        Duration::from_secs_f64(self.move_interval)
    }
}
