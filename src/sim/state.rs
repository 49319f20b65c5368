//! Motion state and bounds types
//!
//! One transient entity per run: position, direction (or angle), and an
//! optional bounding rectangle. Recreated on each run, discarded on stop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Direction;

/// Axis-aligned bounding rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Shrink the rectangle by `amount` on every edge.
    ///
    /// A rectangle too small to inset collapses to its center line on that
    /// axis rather than inverting.
    pub fn inset(&self, amount: f32) -> Bounds {
        let cx = (self.left + self.right) / 2.0;
        let cy = (self.top + self.bottom) / 2.0;
        Bounds {
            left: (self.left + amount).min(cx),
            top: (self.top + amount).min(cy),
            right: (self.right - amount).max(cx),
            bottom: (self.bottom - amount).max(cy),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Clamp a point into the rectangle
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left, self.right),
            p.y.clamp(self.top, self.bottom),
        )
    }
}

/// How the pointer advances each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Straight-line motion along a unit vector; axes flip on bounce
    Linear { dir: Vec2 },
    /// Orbit around a fixed center; the angle accumulates per tick
    Circular { center: Vec2, angle: f32 },
}

/// Complete motion state, owned exclusively by the tick loop
#[derive(Debug, Clone)]
pub struct MotionState {
    /// Current pointer position
    pub pos: Vec2,
    /// Current direction or angle
    pub motion: Motion,
    /// Bounding rectangle, if movement is window-constrained
    pub bounds: Option<Bounds>,
    /// Ticks elapsed since the run started
    pub ticks: u64,
}

impl MotionState {
    /// Create the state for a run starting at `start`.
    ///
    /// Circular motion orbits the starting position.
    pub fn new(start: Vec2, direction: Direction, bounds: Option<Bounds>) -> Self {
        let motion = match direction.vector() {
            Some(dir) => Motion::Linear { dir },
            None => Motion::Circular {
                center: start,
                angle: 0.0,
            },
        };
        Self {
            pos: start,
            motion,
            bounds,
            ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let inset = bounds.inset(10.0);
        assert_eq!(inset, Bounds::new(10.0, 10.0, 90.0, 90.0));
    }

    #[test]
    fn test_inset_degenerate_collapses_to_center() {
        // 12 units wide, inset by 10 per edge would invert; collapses instead
        let bounds = Bounds::new(0.0, 0.0, 12.0, 100.0);
        let inset = bounds.inset(10.0);
        assert_eq!(inset.left, 6.0);
        assert_eq!(inset.right, 6.0);
        assert_eq!(inset.top, 10.0);
        assert_eq!(inset.bottom, 90.0);
    }

    #[test]
    fn test_contains_and_clamp() {
        let bounds = Bounds::new(10.0, 10.0, 90.0, 90.0);
        assert!(bounds.contains(Vec2::new(10.0, 90.0)));
        assert!(!bounds.contains(Vec2::new(9.9, 50.0)));
        assert_eq!(
            bounds.clamp(Vec2::new(-5.0, 120.0)),
            Vec2::new(10.0, 90.0)
        );
    }

    #[test]
    fn test_state_for_circular_orbits_start() {
        let state = MotionState::new(Vec2::new(300.0, 200.0), Direction::Circular, None);
        match state.motion {
            Motion::Circular { center, angle } => {
                assert_eq!(center, Vec2::new(300.0, 200.0));
                assert_eq!(angle, 0.0);
            }
            _ => panic!("expected circular motion"),
        }
    }
}
