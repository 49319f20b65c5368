//! Deterministic motion module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - No platform or I/O dependencies
//! - Bounce and clamp arithmetic only

pub mod state;
pub mod tick;

pub use state::{Bounds, Motion, MotionState};
pub use tick::{TickOutput, TickParams, tick};
