//! Controller state management
//!
//! Defines the drag state machine and the pointer events that drive it.
//! The state only carries transient session data; the region's bounds and
//! the listeners live in the controller.

use crate::domain::core::Point;
use crate::domain::drag::DragSession;
use crate::domain::zone::Zone;

/// Drag state - either idle or dragging a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// No button held, hover updates the cursor only
    #[default]
    Idle,
    /// A button is held and the captured zone follows the pointer
    Dragging(DragSession),
}

impl ControllerState {
    /// Returns the active drag session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            ControllerState::Dragging(session) => Some(session),
            ControllerState::Idle => None,
        }
    }

    /// Mutable access to the active drag session
    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            ControllerState::Dragging(session) => Some(session),
            ControllerState::Idle => None,
        }
    }
}

/// Pointer events supplied by the host
///
/// Positions are absolute, in the parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved with no button held
    Moved(Point),
    /// Pointer left the region
    Exited,
    /// Button pressed
    Pressed(Point),
    /// Pointer moved with the button held
    Dragged(Point),
    /// Button released
    Released,
}

/// State machine for drag transitions
pub struct StateMachine;

impl StateMachine {
    /// Processes a pointer event and returns the new state
    ///
    /// # Arguments
    /// * `current_state` - Current controller state
    /// * `event` - Event to process
    /// * `zone_at_press` - Zone under the pointer, only consulted for presses
    ///
    /// # Returns
    /// New state after processing the event. Geometry is not touched here.
    pub fn process_event(
        current_state: ControllerState,
        event: PointerEvent,
        zone_at_press: Zone,
    ) -> ControllerState {
        match (current_state, event) {
            (ControllerState::Idle, PointerEvent::Pressed(pos)) if zone_at_press.is_active() => {
                ControllerState::Dragging(DragSession::begin(zone_at_press, pos))
            }

            (ControllerState::Dragging(_), PointerEvent::Released) => ControllerState::Idle,

            // Hover, exit, drag steps and stray presses/releases keep the state
            (state, _) => state,
        }
    }
}
