//! Window geometry lookup
//!
//! Enumerates on-screen windows via xcap. Failures here are always
//! transient (window closed, minimized, enumeration error) and degrade to
//! `None`; the tick loop falls back to last-known bounds or unconstrained
//! movement.

use serde::Serialize;
use xcap::Window;

use crate::sim::Bounds;

/// Seam between the tick loop and window enumeration
pub trait BoundsSource {
    /// Bounds of the first visible window whose title contains
    /// `title_fragment` (case-insensitive)
    fn bounds(&mut self, title_fragment: &str) -> Option<Bounds>;
}

/// Live window enumeration
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemWindows;

impl BoundsSource for SystemWindows {
    fn bounds(&mut self, title_fragment: &str) -> Option<Bounds> {
        find_bounds(title_fragment)
    }
}

/// A visible window, for `--list-windows`
#[derive(Debug, Clone, Serialize)]
pub struct WindowInfo {
    pub title: String,
    pub app_name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

fn visible_windows() -> Vec<Window> {
    let windows = match Window::all() {
        Ok(windows) => windows,
        Err(e) => {
            log::warn!("window enumeration failed: {e}");
            return Vec::new();
        }
    };
    windows
        .into_iter()
        .filter(|w| !w.is_minimized().unwrap_or(true))
        .collect()
}

/// List visible windows with a non-empty title and real geometry
pub fn list_windows() -> Vec<WindowInfo> {
    visible_windows()
        .iter()
        .map(|w| WindowInfo {
            title: w.title().unwrap_or_default(),
            app_name: w.app_name().unwrap_or_default(),
            x: w.x().unwrap_or(0),
            y: w.y().unwrap_or(0),
            width: w.width().unwrap_or(0),
            height: w.height().unwrap_or(0),
        })
        .filter(|w| !w.title.is_empty() && w.width > 0 && w.height > 0)
        .collect()
}

/// Bounds of the first visible window whose title contains `title_fragment`
pub fn find_bounds(title_fragment: &str) -> Option<Bounds> {
    let needle = title_fragment.to_lowercase();
    let windows = visible_windows();

    let window = windows.iter().find(|w| {
        w.title()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle)
    });

    match window {
        Some(w) => {
            let x = w.x().unwrap_or(0) as f32;
            let y = w.y().unwrap_or(0) as f32;
            let width = w.width().unwrap_or(0) as f32;
            let height = w.height().unwrap_or(0) as f32;
            if width <= 0.0 || height <= 0.0 {
                log::debug!("window matching '{title_fragment}' has no geometry");
                return None;
            }
            Some(Bounds::new(x, y, x + width, y + height))
        }
        None => {
            log::debug!("no visible window matching '{title_fragment}'");
            None
        }
    }
}
