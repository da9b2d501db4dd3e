//! Edge-resizer: interactive resize-and-move for a region inside a parent
//!
//! Hovering near an edge or corner shows a directional cursor, dragging
//! resizes or moves the region, and every result is clamped to stay inside
//! the parent's bounds.

pub mod app;
pub mod config;
pub mod domain;

#[cfg(windows)]
pub mod platform;

pub use app::{ControllerState, DragController, Host, ListenerId, PointerEvent};
pub use config::{ConfigError, ResizerConfig};
pub use domain::core::{Point, Rect, Size};
pub use domain::zone::{CursorHint, Zone};
