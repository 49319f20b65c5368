//! Restless - keeps the mouse pointer moving
//!
//! Core modules:
//! - `sim`: Deterministic motion stepping (bounce, circular path, click cadence)
//! - `platform`: OS seam (pointer injection, cursor position, window bounds)
//! - `runner`: Background tick loop with cancellation
//! - `config`: Validated run configuration

pub mod config;
pub mod platform;
pub mod runner;
pub mod sim;

pub use config::{Config, ConfigError, Direction};

use glam::Vec2;

/// Motion constants
pub mod consts {
    /// Padding subtracted from each bounds edge before boundary checks
    pub const BOUNDS_INSET: f32 = 10.0;

    /// Radius of the circular path (pixels)
    pub const CIRCLE_RADIUS: f32 = 50.0;
    /// Angle advanced per tick in circular mode (10 degrees in radians)
    pub const CIRCLE_STEP: f32 = std::f32::consts::PI / 18.0;

    /// Gap between the left and right click of a click pair (milliseconds)
    pub const CLICK_PAIR_GAP_MS: u64 = 100;

    /// Seconds between target-window bounds re-queries
    pub const BOUNDS_REFRESH_SECS: f64 = 2.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::TAU;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
