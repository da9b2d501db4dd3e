//! Drag controller and host boundary
//!
//! The controller owns the region's bounds and the drag session. It turns
//! pointer events into cursor hints and clamped bounds, and pushes every
//! committed change to the host and the registered resize listeners.
//! Everything runs synchronously on the caller's thread.

use crate::app::state::{ControllerState, PointerEvent, StateMachine};
use crate::config::ResizerConfig;
use crate::domain::bounds::{clamp, is_contained};
use crate::domain::core::{Point, Rect, Size};
use crate::domain::drag::transform;
use crate::domain::zone::{classify, cursor_for, CursorHint, Zone};

/// Capabilities the controller needs from the surrounding UI framework
pub trait Host {
    /// Shows the given cursor over the region
    fn set_cursor(&mut self, hint: CursorHint);

    /// Applies new bounds to the region, in parent coordinates
    fn commit_bounds(&mut self, bounds: Rect);

    /// Asks the parent container to repaint and lay out again
    fn request_parent_repaint_and_relayout(&mut self);

    /// Current size of the parent container, or None when detached
    fn parent_size(&self) -> Option<Size>;
}

/// Handle returned when registering a resize listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ResizeListener = Box<dyn FnMut(Rect)>;

/// Resize-and-move controller for one region inside a parent
pub struct DragController<H: Host> {
    host: H,
    bounds: Rect,
    config: ResizerConfig,
    state: ControllerState,
    enabled: bool,
    listeners: Vec<(ListenerId, ResizeListener)>,
    next_listener_id: u64,
}

impl<H: Host> DragController<H> {
    /// Creates an idle, enabled controller for a region with the given bounds
    pub fn new(host: H, bounds: Rect, config: ResizerConfig) -> Self {
        Self {
            host,
            bounds,
            config,
            state: ControllerState::Idle,
            enabled: true,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Returns the host this controller drives
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current bounds of the region in parent coordinates
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the bounds from the outside layout
    ///
    /// The controller owns the geometry while a drag is active, so the update
    /// is rejected in that case.
    ///
    /// # Returns
    /// true if the bounds were replaced
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        if self.is_dragging() {
            tracing::debug!(?bounds, "ignoring external bounds update during drag");
            return false;
        }
        self.bounds = bounds;
        true
    }

    /// Active configuration
    pub fn config(&self) -> &ResizerConfig {
        &self.config
    }

    /// Replaces the configuration
    ///
    /// A new edge margin applies from the next hover or press; a drag in
    /// progress keeps the zone it captured.
    pub fn set_config(&mut self, config: ResizerConfig) {
        self.config = config;
    }

    /// Current drag state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Returns true while a button is held on an active zone
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ControllerState::Dragging(_))
    }

    /// Returns true if pointer events are being handled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turns pointer handling on or off
    ///
    /// Disabling during a drag ends the session and resets the cursor.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            if self.is_dragging() {
                tracing::debug!("resizing disabled, ending drag session");
                self.state = ControllerState::Idle;
            }
            self.host.set_cursor(CursorHint::Default);
        }
    }

    /// Registers a callback invoked with the new bounds after every commit
    ///
    /// Listeners run synchronously, in registration order.
    pub fn add_resize_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Rect) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a previously registered listener
    ///
    /// # Returns
    /// true if the listener was found
    pub fn remove_resize_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered resize listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatches a pointer event to the matching handler
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(pos) => self.pointer_moved(pos),
            PointerEvent::Exited => self.pointer_exited(),
            PointerEvent::Pressed(pos) => self.pointer_pressed(pos),
            PointerEvent::Dragged(pos) => self.pointer_dragged(pos),
            PointerEvent::Released => self.pointer_released(),
        }
    }

    /// Hover: updates the cursor for the zone under the pointer
    pub fn pointer_moved(&mut self, pos: Point) {
        if !self.enabled || self.is_dragging() {
            return;
        }
        let zone = self.zone_at(pos);
        self.host.set_cursor(cursor_for(zone));
    }

    /// Pointer left the region: resets the cursor unless a drag is active
    pub fn pointer_exited(&mut self) {
        if !self.enabled || self.is_dragging() {
            return;
        }
        self.host.set_cursor(CursorHint::Default);
    }

    /// Captures the zone under the pointer and starts a drag session
    pub fn pointer_pressed(&mut self, pos: Point) {
        if !self.enabled {
            return;
        }
        let zone = self.zone_at(pos);
        self.state = StateMachine::process_event(self.state, PointerEvent::Pressed(pos), zone);
        if let Some(session) = self.state.session() {
            tracing::debug!(zone = ?session.zone(), anchor = ?session.anchor(), "drag started");
        }
    }

    /// Applies one drag step: transform, clamp, commit, notify, re-anchor
    pub fn pointer_dragged(&mut self, pos: Point) {
        if !self.enabled {
            return;
        }
        let Some(session) = self.state.session().copied() else {
            return;
        };

        let Some(parent) = self.host.parent_size().filter(|size| !size.is_empty()) else {
            tracing::debug!("no parent bounds, skipping drag step");
            return;
        };

        let zone = session.zone();
        let (dx, dy) = session.delta(pos);
        let (candidate, rule) = transform(zone, self.bounds, dx, dy);
        let clamped = clamp(candidate, parent);
        debug_assert!(is_contained(clamped, parent));

        tracing::trace!(?zone, dx, dy, ?candidate, ?clamped, "drag step");
        self.commit(clamped);

        if let Some(session) = self.state.session_mut() {
            session.reanchor(rule, pos);
        }

        // Cursor stays on the captured zone for the whole drag
        self.host.set_cursor(cursor_for(zone));
    }

    /// Ends the drag session; the last drag step already committed
    pub fn pointer_released(&mut self) {
        if self.is_dragging() {
            tracing::debug!(bounds = ?self.bounds, "drag finished");
        }
        self.state = StateMachine::process_event(self.state, PointerEvent::Released, Zone::None);
    }

    fn zone_at(&self, pos: Point) -> Zone {
        classify(
            self.bounds.to_local(pos),
            self.bounds.size(),
            self.config.edge_margin,
        )
    }

    fn commit(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.host.commit_bounds(bounds);
        self.host.request_parent_repaint_and_relayout();
        for (_, listener) in self.listeners.iter_mut() {
            listener(bounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drag::DragSession;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Host that records every call
    #[derive(Debug, Default)]
    struct RecordingHost {
        parent: Option<Size>,
        cursors: Vec<CursorHint>,
        commits: Vec<Rect>,
        repaints: usize,
    }

    impl RecordingHost {
        fn with_parent(width: i32, height: i32) -> Self {
            Self {
                parent: Some(Size::new(width, height)),
                ..Self::default()
            }
        }

        fn last_cursor(&self) -> Option<CursorHint> {
            self.cursors.last().copied()
        }
    }

    impl Host for RecordingHost {
        fn set_cursor(&mut self, hint: CursorHint) {
            self.cursors.push(hint);
        }

        fn commit_bounds(&mut self, bounds: Rect) {
            self.commits.push(bounds);
        }

        fn request_parent_repaint_and_relayout(&mut self) {
            self.repaints += 1;
        }

        fn parent_size(&self) -> Option<Size> {
            self.parent
        }
    }

    fn controller(bounds: Rect, parent: i32) -> DragController<RecordingHost> {
        DragController::new(
            RecordingHost::with_parent(parent, parent),
            bounds,
            ResizerConfig::default(),
        )
    }

    fn drag(controller: &mut DragController<RecordingHost>, press: Point, steps: &[Point]) {
        controller.pointer_pressed(press);
        for step in steps {
            controller.pointer_dragged(*step);
        }
    }

    #[test]
    fn simple_south_resize() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        drag(&mut c, Point::new(25, 48), &[Point::new(25, 70)]);

        assert_eq!(c.bounds(), Rect::new(0, 0, 50, 72));
        assert_eq!(c.host().commits, vec![Rect::new(0, 0, 50, 72)]);
        assert_eq!(c.host().repaints, 1);
    }

    #[test]
    fn east_resize_is_clamped_to_parent() {
        let mut c = controller(Rect::new(180, 10, 50, 50), 200);
        c.pointer_pressed(Point::new(228, 30));
        assert_eq!(c.state().session().map(DragSession::zone), Some(Zone::East));

        c.pointer_dragged(Point::new(268, 30));
        assert_eq!(c.bounds(), Rect::new(180, 10, 20, 50));
    }

    #[test]
    fn move_past_negative_edge_shrinks() {
        let mut c = controller(Rect::new(5, 5, 50, 50), 200);
        drag(&mut c, Point::new(30, 30), &[Point::new(10, 10)]);

        assert_eq!(c.bounds(), Rect::new(0, 0, 35, 35));
    }

    #[test]
    fn north_west_keeps_original_anchor() {
        let mut c = controller(Rect::new(50, 50, 100, 100), 500);
        drag(&mut c, Point::new(52, 52), &[Point::new(62, 47)]);
        assert_eq!(c.bounds(), Rect::new(60, 45, 90, 105));
        assert_eq!(c.state().session().map(DragSession::anchor), Some(Point::new(52, 52)));

        // Same pointer position again: delta is still measured from the press point
        c.pointer_dragged(Point::new(62, 47));
        assert_eq!(c.bounds(), Rect::new(70, 40, 80, 110));
    }

    #[test]
    fn south_reanchors_between_steps() {
        let mut c = controller(Rect::new(10, 10, 100, 100), 500);
        drag(
            &mut c,
            Point::new(50, 108),
            &[Point::new(50, 113), Point::new(50, 116)],
        );

        assert_eq!(c.bounds(), Rect::new(10, 10, 100, 108));
        assert_eq!(c.host().commits.len(), 2);
    }

    #[test]
    fn east_and_south_east_reanchor_fully() {
        let mut c = controller(Rect::new(10, 10, 100, 100), 500);
        drag(
            &mut c,
            Point::new(108, 108),
            &[Point::new(112, 110), Point::new(115, 111)],
        );

        assert_eq!(c.bounds(), Rect::new(10, 10, 107, 103));
        assert_eq!(c.state().session().map(DragSession::anchor), Some(Point::new(115, 111)));
    }

    #[test]
    fn north_east_reanchors_x_only() {
        let mut c = controller(Rect::new(50, 50, 100, 100), 500);
        drag(&mut c, Point::new(148, 52), &[Point::new(158, 47)]);
        assert_eq!(c.bounds(), Rect::new(50, 45, 110, 105));
        assert_eq!(c.state().session().map(DragSession::anchor), Some(Point::new(158, 52)));

        c.pointer_dragged(Point::new(158, 47));
        assert_eq!(c.bounds(), Rect::new(50, 40, 110, 110));
    }

    #[test]
    fn south_west_reanchors_y_only() {
        let mut c = controller(Rect::new(50, 50, 100, 100), 500);
        drag(&mut c, Point::new(52, 148), &[Point::new(62, 153)]);
        assert_eq!(c.bounds(), Rect::new(60, 50, 90, 105));
        assert_eq!(c.state().session().map(DragSession::anchor), Some(Point::new(52, 153)));

        c.pointer_dragged(Point::new(62, 153));
        assert_eq!(c.bounds(), Rect::new(70, 50, 80, 105));
    }

    #[test]
    fn detached_region_skips_drag_steps() {
        let mut c = DragController::new(
            RecordingHost::default(),
            Rect::new(0, 0, 50, 50),
            ResizerConfig::default(),
        );
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        c.add_resize_listener(move |_| *seen.borrow_mut() += 1);

        drag(&mut c, Point::new(25, 48), &[Point::new(25, 70)]);

        assert!(c.is_dragging());
        assert_eq!(c.bounds(), Rect::new(0, 0, 50, 50));
        assert!(c.host().commits.is_empty());
        assert_eq!(c.host().repaints, 0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn empty_parent_is_treated_as_detached() {
        let mut c = DragController::new(
            RecordingHost::with_parent(0, 100),
            Rect::new(0, 0, 50, 50),
            ResizerConfig::default(),
        );
        drag(&mut c, Point::new(25, 25), &[Point::new(30, 30)]);
        assert!(c.host().commits.is_empty());
    }

    #[test]
    fn parent_size_is_read_on_every_step() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        drag(&mut c, Point::new(48, 25), &[Point::new(98, 25)]);
        assert_eq!(c.bounds(), Rect::new(0, 0, 100, 50));

        c.host_mut().parent = Some(Size::new(80, 200));
        c.pointer_dragged(Point::new(108, 25));
        assert_eq!(c.bounds(), Rect::new(0, 0, 80, 50));
    }

    #[test]
    fn hover_sets_zone_cursor() {
        let mut c = controller(Rect::new(100, 100, 100, 100), 500);

        c.pointer_moved(Point::new(150, 101));
        assert_eq!(c.host().last_cursor(), Some(CursorHint::NResize));
        c.pointer_moved(Point::new(198, 198));
        assert_eq!(c.host().last_cursor(), Some(CursorHint::SeResize));
        c.pointer_moved(Point::new(150, 150));
        assert_eq!(c.host().last_cursor(), Some(CursorHint::Move));
        c.pointer_moved(Point::new(50, 50));
        assert_eq!(c.host().last_cursor(), Some(CursorHint::Default));
        assert!(c.host().commits.is_empty());
    }

    #[test]
    fn exit_resets_cursor_when_idle() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        c.pointer_moved(Point::new(49, 25));
        c.pointer_exited();
        assert_eq!(c.host().last_cursor(), Some(CursorHint::Default));
    }

    #[test]
    fn cursor_is_pinned_during_drag() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        drag(&mut c, Point::new(49, 25), &[Point::new(60, 25)]);
        assert_eq!(c.host().last_cursor(), Some(CursorHint::EResize));

        let count = c.host().cursors.len();
        c.pointer_moved(Point::new(30, 30));
        c.pointer_exited();
        assert_eq!(c.host().cursors.len(), count);
    }

    #[test]
    fn release_ends_session() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        drag(&mut c, Point::new(25, 48), &[Point::new(25, 60)]);
        c.pointer_released();

        assert!(!c.is_dragging());
        let commits = c.host().commits.len();
        c.pointer_dragged(Point::new(25, 90));
        assert_eq!(c.host().commits.len(), commits);
        assert_eq!(c.bounds(), Rect::new(0, 0, 50, 62));
    }

    #[test]
    fn press_outside_region_does_not_start_drag() {
        let mut c = controller(Rect::new(50, 50, 50, 50), 200);
        c.pointer_pressed(Point::new(10, 10));
        assert!(!c.is_dragging());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        let log = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            c.add_resize_listener(move |rect| log.borrow_mut().push((name, rect)));
        }

        drag(&mut c, Point::new(25, 48), &[Point::new(25, 70)]);

        let expected = Rect::new(0, 0, 50, 72);
        assert_eq!(
            *log.borrow(),
            vec![("first", expected), ("second", expected), ("third", expected)]
        );
    }

    #[test]
    fn removed_listener_is_not_called() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        let calls = Rc::new(RefCell::new(Vec::new()));

        let a = Rc::clone(&calls);
        let first = c.add_resize_listener(move |_| a.borrow_mut().push("a"));
        let b = Rc::clone(&calls);
        c.add_resize_listener(move |_| b.borrow_mut().push("b"));

        assert!(c.remove_resize_listener(first));
        assert!(!c.remove_resize_listener(first));
        assert_eq!(c.listener_count(), 1);

        drag(&mut c, Point::new(25, 48), &[Point::new(25, 70)]);
        assert_eq!(*calls.borrow(), vec!["b"]);
    }

    #[test]
    fn external_bounds_update_rejected_while_dragging() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        c.pointer_pressed(Point::new(25, 25));

        assert!(!c.set_bounds(Rect::new(10, 10, 10, 10)));
        assert_eq!(c.bounds(), Rect::new(0, 0, 50, 50));

        c.pointer_released();
        assert!(c.set_bounds(Rect::new(10, 10, 10, 10)));
        assert_eq!(c.bounds(), Rect::new(10, 10, 10, 10));
    }

    #[test]
    fn disabled_controller_ignores_pointer() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        c.set_enabled(false);
        let cursors = c.host().cursors.len();

        c.pointer_moved(Point::new(49, 25));
        drag(&mut c, Point::new(25, 48), &[Point::new(25, 70)]);

        assert!(!c.is_dragging());
        assert_eq!(c.host().cursors.len(), cursors);
        assert!(c.host().commits.is_empty());
    }

    #[test]
    fn disabling_mid_drag_ends_session() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        c.pointer_pressed(Point::new(25, 48));
        c.set_enabled(false);

        assert!(!c.is_dragging());
        assert_eq!(c.host().last_cursor(), Some(CursorHint::Default));

        c.set_enabled(true);
        c.pointer_dragged(Point::new(25, 70));
        assert!(c.host().commits.is_empty());
    }

    #[test]
    fn custom_margin_widens_edges() {
        let mut c = DragController::new(
            RecordingHost::with_parent(200, 200),
            Rect::new(0, 0, 100, 100),
            ResizerConfig::with_edge_margin(20),
        );
        c.pointer_moved(Point::new(85, 50));
        assert_eq!(c.host().last_cursor(), Some(CursorHint::EResize));

        c.set_config(ResizerConfig::default());
        c.pointer_moved(Point::new(85, 50));
        assert_eq!(c.host().last_cursor(), Some(CursorHint::Move));
    }

    #[test]
    fn handle_event_dispatches() {
        let mut c = controller(Rect::new(0, 0, 50, 50), 200);
        for event in [
            PointerEvent::Moved(Point::new(25, 48)),
            PointerEvent::Pressed(Point::new(25, 48)),
            PointerEvent::Dragged(Point::new(25, 70)),
            PointerEvent::Released,
        ] {
            c.handle_event(event);
        }

        assert_eq!(c.bounds(), Rect::new(0, 0, 50, 72));
        assert!(!c.is_dragging());
        assert_eq!(c.host().cursors, vec![CursorHint::SResize, CursorHint::SResize]);
    }
}
