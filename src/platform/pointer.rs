//! System pointer: cursor position, movement, and click injection

use std::time::Duration;

use device_query::{DeviceQuery, DeviceState};
use enigo::{Enigo, MouseButton, MouseControllable};
use glam::Vec2;

use crate::consts::CLICK_PAIR_GAP_MS;

/// Seam between the tick loop and the OS input stack
pub trait Pointer {
    /// Current cursor position, if it can be read
    fn position(&mut self) -> Option<Vec2>;
    /// Move the cursor to an absolute position
    fn move_to(&mut self, pos: Vec2);
    /// Issue a left click followed by a right click
    fn click_pair(&mut self);
}

/// Real pointer: enigo for injection, device_query for position reads
pub struct SystemPointer {
    enigo: Enigo,
    device_state: DeviceState,
}

impl SystemPointer {
    pub fn new() -> Self {
        Self {
            enigo: Enigo::new(),
            device_state: DeviceState::new(),
        }
    }
}

impl Default for SystemPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pointer for SystemPointer {
    fn position(&mut self) -> Option<Vec2> {
        let (x, y) = self.device_state.get_mouse().coords;
        Some(Vec2::new(x as f32, y as f32))
    }

    fn move_to(&mut self, pos: Vec2) {
        self.enigo
            .mouse_move_to(pos.x.round() as i32, pos.y.round() as i32);
    }

    fn click_pair(&mut self) {
        self.enigo.mouse_click(MouseButton::Left);
        // Short settle gap so the two clicks register as separate events
        std::thread::sleep(Duration::from_millis(CLICK_PAIR_GAP_MS));
        self.enigo.mouse_click(MouseButton::Right);
    }
}

/// Pointer that moves nothing; for dry runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPointer;

impl Pointer for NoopPointer {
    fn position(&mut self) -> Option<Vec2> {
        None
    }

    fn move_to(&mut self, pos: Vec2) {
        log::trace!("dry run: move to ({:.1}, {:.1})", pos.x, pos.y);
    }

    fn click_pair(&mut self) {
        log::trace!("dry run: click pair");
    }
}
