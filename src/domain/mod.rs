//! Domain logic and core data structures
//!
//! This module contains the pure geometry behind resize-and-move: zone
//! hit-testing, per-zone drag transforms and bounds clamping. Nothing here
//! talks to a host or windowing system.

pub mod bounds;
pub mod core;
pub mod drag;
pub mod zone;
