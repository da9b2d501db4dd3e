//! Core geometry types
//!
//! Integer points, sizes and rectangles shared by the classifier, the clamp
//! policy and the drag controller. All values are plain pixels in whatever
//! coordinate space the caller is working in.

/// A 2-D integer coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Creates a new size
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is smaller than one pixel
    pub fn is_empty(&self) -> bool {
        self.width < 1 || self.height < 1
    }
}

/// Rectangle in pixel coordinates
///
/// This is the bounding box of the resizable region, expressed in the
/// parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the right edge coordinate (exclusive)
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the bottom edge coordinate (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns the top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the width and height
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns true if this rectangle contains the given point
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Converts an absolute point into coordinates relative to this rectangle's origin
    pub fn to_local(&self, p: Point) -> Point {
        Point::new(p.x.saturating_sub(self.x), p.y.saturating_sub(self.y))
    }

    /// Returns a copy moved by the given offset, size unchanged
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }
}
