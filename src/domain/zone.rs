//! Edge and corner hit-testing
//!
//! Maps a region-local pointer position to one of the eight resize zones
//! or the interior move zone, and maps each zone to a cursor hint. Pure
//! functions only, no host state is touched here.

use crate::domain::core::{Point, Rect, Size};

/// Default width of the edge hit band in pixels
pub const DEFAULT_EDGE_MARGIN: i32 = 6;

/// Which part of the region the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    /// Interior, dragging translates the whole region
    Move,
    /// Pointer is outside the region
    None,
}

impl Zone {
    /// Returns true for every zone except [`Zone::None`]
    pub fn is_active(self) -> bool {
        self != Zone::None
    }
}

/// Cursor shape the host should show for a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorHint {
    #[default]
    Default,
    NResize,
    SResize,
    EResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
    Move,
}

/// Classifies a pointer position relative to the region's edges
///
/// # Arguments
/// * `pointer` - Pointer position in region-local coordinates
/// * `region_size` - Current size of the region
/// * `margin` - Width of the edge hit band; values below 1 are treated as 1
///
/// # Returns
/// A corner zone when the pointer is near both a horizontal and a vertical
/// edge, an edge zone when near exactly one, [`Zone::Move`] for the interior
/// and [`Zone::None`] for points outside the region.
///
/// When the region is narrower than two margins both opposite flags can be
/// set at once; west wins over east and north wins over south.
pub fn classify(pointer: Point, region_size: Size, margin: i32) -> Zone {
    let margin = margin.max(1);
    let Size { width, height } = region_size;

    if !Rect::new(0, 0, width, height).contains_point(pointer) {
        return Zone::None;
    }

    let west = pointer.x < margin;
    let east = pointer.x > width - margin;
    let north = pointer.y < margin;
    let south = pointer.y > height - margin;

    match (west, east, north, south) {
        (true, _, true, _) => Zone::NorthWest,
        (_, true, true, _) => Zone::NorthEast,
        (true, _, _, true) => Zone::SouthWest,
        (_, true, _, true) => Zone::SouthEast,
        (true, _, _, _) => Zone::West,
        (_, true, _, _) => Zone::East,
        (_, _, true, _) => Zone::North,
        (_, _, _, true) => Zone::South,
        _ => Zone::Move,
    }
}

/// Returns the cursor hint shown while hovering or dragging a zone
pub fn cursor_for(zone: Zone) -> CursorHint {
    match zone {
        Zone::North => CursorHint::NResize,
        Zone::South => CursorHint::SResize,
        Zone::East => CursorHint::EResize,
        Zone::West => CursorHint::WResize,
        Zone::NorthEast => CursorHint::NeResize,
        Zone::NorthWest => CursorHint::NwResize,
        Zone::SouthEast => CursorHint::SeResize,
        Zone::SouthWest => CursorHint::SwResize,
        Zone::Move => CursorHint::Move,
        Zone::None => CursorHint::Default,
    }
}
