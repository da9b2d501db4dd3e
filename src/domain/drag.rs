//! Per-zone drag transforms and the drag session
//!
//! Each zone turns a pointer delta into a candidate bounding box and tells
//! the caller how to move the delta baseline afterwards. Zones that grow
//! from a fixed origin (S, E, SE, and one axis of NE/SW) re-anchor to the
//! pointer after every committed step. Zones that move the top or left edge
//! keep the press point as their baseline.

use crate::domain::core::{Point, Rect};
use crate::domain::zone::Zone;

/// How the drag anchor is updated after a step is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reanchor {
    /// Anchor stays at the press point
    Keep,
    /// Anchor becomes the current pointer position
    Full,
    /// Only the x component follows the pointer
    XOnly,
    /// Only the y component follows the pointer
    YOnly,
}

impl Reanchor {
    /// Returns the new anchor for a pointer at `pointer`
    pub fn apply(self, anchor: Point, pointer: Point) -> Point {
        match self {
            Reanchor::Keep => anchor,
            Reanchor::Full => pointer,
            Reanchor::XOnly => Point::new(pointer.x, anchor.y),
            Reanchor::YOnly => Point::new(anchor.x, pointer.y),
        }
    }
}

/// Applies the zone's geometry transform to the current box
///
/// # Arguments
/// * `zone` - Zone captured at press time
/// * `rect` - Region bounds before this step
/// * `dx`, `dy` - Pointer offset from the session anchor
///
/// # Returns
/// The unclamped candidate box and the re-anchor rule for this zone
///
/// # Example
/// ```rust
/// use edge_resizer::domain::{core::Rect, drag::{transform, Reanchor}, zone::Zone};
///
/// let (candidate, rule) = transform(Zone::NorthWest, Rect::new(50, 50, 100, 100), 10, -5);
/// assert_eq!(candidate, Rect::new(60, 45, 90, 105));
/// assert_eq!(rule, Reanchor::Keep);
/// ```
pub fn transform(zone: Zone, rect: Rect, dx: i32, dy: i32) -> (Rect, Reanchor) {
    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = rect;

    let add = i32::saturating_add;
    let sub = i32::saturating_sub;

    match zone {
        Zone::North => (Rect::new(x, add(y, dy), w, sub(h, dy)), Reanchor::Keep),
        Zone::South => (Rect::new(x, y, w, add(h, dy)), Reanchor::Full),
        Zone::West => (Rect::new(add(x, dx), y, sub(w, dx), h), Reanchor::Keep),
        Zone::East => (Rect::new(x, y, add(w, dx), h), Reanchor::Full),
        Zone::NorthWest => (
            Rect::new(add(x, dx), add(y, dy), sub(w, dx), sub(h, dy)),
            Reanchor::Keep,
        ),
        Zone::NorthEast => (
            Rect::new(x, add(y, dy), add(w, dx), sub(h, dy)),
            Reanchor::XOnly,
        ),
        Zone::SouthWest => (
            Rect::new(add(x, dx), y, sub(w, dx), add(h, dy)),
            Reanchor::YOnly,
        ),
        Zone::SouthEast => (Rect::new(x, y, add(w, dx), add(h, dy)), Reanchor::Full),
        Zone::Move => (rect.translate(dx, dy), Reanchor::Keep),
        Zone::None => (rect, Reanchor::Keep),
    }
}

/// Transient state that exists while a pointer button is held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Zone captured at press time
    zone: Zone,
    /// Delta baseline in the parent's coordinate space
    anchor: Point,
}

impl DragSession {
    /// Starts a session for the zone under the press point
    pub fn begin(zone: Zone, press: Point) -> Self {
        Self {
            zone,
            anchor: press,
        }
    }

    /// Zone captured when the button was pressed
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Current delta baseline
    ///
    /// Starts at the press point and moves only for zones that re-anchor.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Pointer offset from the current anchor
    pub fn delta(&self, pointer: Point) -> (i32, i32) {
        (
            pointer.x.saturating_sub(self.anchor.x),
            pointer.y.saturating_sub(self.anchor.y),
        )
    }

    /// Moves the anchor according to the zone's rule
    pub fn reanchor(&mut self, rule: Reanchor, pointer: Point) {
        self.anchor = rule.apply(self.anchor, pointer);
    }
}
