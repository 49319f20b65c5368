//! Platform abstraction layer
//!
//! Everything that touches the OS lives here:
//! - Pointer injection and cursor position (`pointer`)
//! - Window enumeration and geometry (`window`)
//!
//! The sim and runner only see the `Pointer` and `BoundsSource` traits, so
//! motion logic stays testable without a display.

pub mod pointer;
pub mod window;

pub use pointer::{NoopPointer, Pointer, SystemPointer};
pub use window::{BoundsSource, SystemWindows, WindowInfo, find_bounds, list_windows};
