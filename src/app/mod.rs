//! Application orchestration layer
//!
//! This module drives the domain logic from pointer events and hands the
//! results to the host through the [`Host`] trait.

pub mod controller;
pub mod state;

pub use controller::{DragController, Host, ListenerId};
pub use state::{ControllerState, PointerEvent, StateMachine};
