//! General Windows platform utilities
//!
//! Conversions between the domain geometry types and Win32 structures.

use crate::domain::core::{Rect, Size};
use windows::Win32::Foundation::RECT;

/// Converts a Windows RECT to domain rectangle
pub fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect::new(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
    )
}

/// Size of a client-area RECT
pub fn win32_rect_size(rect: &RECT) -> Size {
    Size::new(rect.right - rect.left, rect.bottom - rect.top)
}
