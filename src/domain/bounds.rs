//! Bounds clamping against the parent container
//!
//! Keeps a candidate bounding box fully inside the parent. The order of the
//! steps matters: origin clamps first, then the one-pixel floor, then the
//! far-edge correction using the already clamped origin.

use crate::domain::core::{Rect, Size};

/// Clamps a candidate box so it lies inside a parent of the given size
///
/// 1. A negative origin shrinks the size by the overflow and pins the edge at 0
/// 2. An origin past the parent's far edge is pulled back to the last pixel
/// 3. Width and height are floored at 1
/// 4. Width and height are cut so the far edges do not pass the parent
///
/// The parent must be non-empty; callers skip the clamp otherwise.
///
/// # Example
/// ```rust
/// use edge_resizer::domain::{bounds::clamp, core::{Rect, Size}};
///
/// let clamped = clamp(Rect::new(-15, -15, 50, 50), Size::new(200, 200));
/// assert_eq!(clamped, Rect::new(0, 0, 35, 35));
/// ```
pub fn clamp(candidate: Rect, parent: Size) -> Rect {
    let Rect {
        mut x,
        mut y,
        mut width,
        mut height,
    } = candidate;

    if x < 0 {
        width = width.saturating_add(x);
        x = 0;
    }
    if y < 0 {
        height = height.saturating_add(y);
        y = 0;
    }

    // The last addressable pixel, so at least one column/row remains
    let max_x = (parent.width - 1).max(0);
    let max_y = (parent.height - 1).max(0);
    if x > max_x {
        x = max_x;
    }
    if y > max_y {
        y = max_y;
    }

    width = width.max(1);
    height = height.max(1);

    if x.saturating_add(width) > parent.width {
        width = parent.width - x;
    }
    if y.saturating_add(height) > parent.height {
        height = parent.height - y;
    }

    Rect::new(x, y, width, height)
}

/// Returns true if the box satisfies the containment invariant for the parent
pub fn is_contained(rect: Rect, parent: Size) -> bool {
    rect.x >= 0
        && rect.y >= 0
        && rect.width >= 1
        && rect.height >= 1
        && rect.right() <= parent.width
        && rect.bottom() <= parent.height
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Size = Size {
        width: 200,
        height: 200,
    };

    #[test]
    fn contained_box_is_unchanged() {
        let rect = Rect::new(10, 20, 50, 60);
        assert_eq!(clamp(rect, PARENT), rect);
    }

    #[test]
    fn negative_origin_shrinks_size() {
        assert_eq!(clamp(Rect::new(-15, -15, 50, 50), PARENT), Rect::new(0, 0, 35, 35));
        assert_eq!(clamp(Rect::new(-10, 5, 50, 50), PARENT), Rect::new(0, 5, 40, 50));
    }

    #[test]
    fn overflow_larger_than_size_floors_at_one() {
        assert_eq!(clamp(Rect::new(-80, -90, 50, 50), PARENT), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn far_edge_overflow_cuts_width() {
        assert_eq!(clamp(Rect::new(180, 10, 90, 50), PARENT), Rect::new(180, 10, 20, 50));
        assert_eq!(clamp(Rect::new(10, 190, 50, 40), PARENT), Rect::new(10, 190, 50, 10));
    }

    #[test]
    fn origin_past_parent_keeps_one_pixel() {
        assert_eq!(clamp(Rect::new(250, 300, 10, 10), PARENT), Rect::new(199, 199, 1, 1));
        assert_eq!(clamp(Rect::new(200, 0, 10, 10), PARENT), Rect::new(199, 0, 1, 10));
    }

    #[test]
    fn degenerate_size_is_floored() {
        assert_eq!(clamp(Rect::new(10, 10, 0, -4), PARENT), Rect::new(10, 10, 1, 1));
    }

    #[test]
    fn box_larger_than_parent_fits_exactly() {
        assert_eq!(clamp(Rect::new(0, 0, 500, 500), PARENT), Rect::new(0, 0, 200, 200));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let clamped = clamp(Rect::new(i32::MIN, i32::MAX, i32::MAX, i32::MIN), PARENT);
        assert!(is_contained(clamped, PARENT));
    }
}
