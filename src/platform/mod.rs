//! Platform-specific Windows implementations
//!
//! This module encapsulates all Win32 API interactions needed to host a
//! resizable child window and provides a [`Host`](crate::app::Host)
//! implementation for the controller.

pub mod cursor;
pub mod window;
pub mod windows;

pub use window::{ChildWindowHost, WindowError};
