//! Motion tick
//!
//! Advances the motion state by one step: bounce arithmetic for linear
//! directions, angle accumulation for circular mode, and the click cadence.

use glam::Vec2;

use super::state::{Bounds, Motion, MotionState};
use crate::config::Config;
use crate::consts::{BOUNDS_INSET, CIRCLE_RADIUS, CIRCLE_STEP};
use crate::{normalize_angle, polar_to_cartesian};

/// Per-run stepping parameters derived from the validated config
#[derive(Debug, Clone, Copy)]
pub struct TickParams {
    /// Pixels to move per tick
    pub step: f32,
    /// A click pair is due every this many ticks
    pub ticks_per_click: u64,
}

impl TickParams {
    pub fn from_config(config: &Config) -> Self {
        Self {
            step: config.move_distance,
            ticks_per_click: config.ticks_per_click(),
        }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    /// Where the pointer should be moved
    pub pos: Vec2,
    /// Whether a click pair is due this tick
    pub click: bool,
}

/// Advance the motion state by one tick
pub fn tick(state: &mut MotionState, params: &TickParams) -> TickOutput {
    let bounds = state.bounds;
    let new_pos = match &mut state.motion {
        Motion::Linear { dir } => step_linear(state.pos, dir, params.step, bounds.as_ref()),
        Motion::Circular { center, angle } => step_circular(*center, angle, bounds.as_ref()),
    };

    state.pos = new_pos;
    state.ticks += 1;

    TickOutput {
        pos: new_pos,
        click: state.ticks % params.ticks_per_click == 0,
    }
}

/// Step along `dir`, bouncing off the inset bounds.
///
/// If the candidate position would cross an inset edge in the direction of
/// travel, that axis of `dir` flips and the step is recomputed from the
/// current position anchored inside the inset rectangle. Bounce, not
/// clamp-then-continue: each boundary contact flips the axis exactly once.
fn step_linear(pos: Vec2, dir: &mut Vec2, step: f32, bounds: Option<&Bounds>) -> Vec2 {
    let Some(bounds) = bounds else {
        return pos + *dir * step;
    };

    let inset = bounds.inset(BOUNDS_INSET);
    let candidate = pos + *dir * step;

    if (candidate.x < inset.left && dir.x < 0.0) || (candidate.x > inset.right && dir.x > 0.0) {
        dir.x = -dir.x;
    }
    if (candidate.y < inset.top && dir.y < 0.0) || (candidate.y > inset.bottom && dir.y > 0.0) {
        dir.y = -dir.y;
    }

    // Anchor inside the inset rect first so a stale out-of-bounds position
    // (window moved or shrank between refreshes) re-enters in one tick.
    // The final clamp only matters when the rect is narrower than one step.
    inset.clamp(inset.clamp(pos) + *dir * step)
}

/// Position on the circle for the current angle, then advance and wrap it
fn step_circular(center: Vec2, angle: &mut f32, bounds: Option<&Bounds>) -> Vec2 {
    let pos = center + polar_to_cartesian(CIRCLE_RADIUS, *angle);
    *angle = normalize_angle(*angle + CIRCLE_STEP);

    match bounds {
        Some(bounds) => bounds.inset(BOUNDS_INSET).clamp(pos),
        None => pos,
    }
}
