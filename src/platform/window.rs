//! Child window hosting
//!
//! This module handles:
//! - Reading the parent's client size for clamping
//! - Moving and resizing the child window to committed bounds
//! - Invalidating the parent so it repaints around the new bounds
//! - Showing the zone cursor
//!
//! Child window coordinates are relative to the parent's client area, which
//! is the same space the controller's bounds live in.

use thiserror::Error;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::InvalidateRect;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::app::Host;
use crate::domain::core::{Rect, Size};
use crate::domain::zone::CursorHint;
use crate::platform::cursor::apply_cursor;
use crate::platform::windows::{win32_rect_size, win32_rect_to_rect};

/// Error types for window operations
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Invalid window handle {0:?}")]
    InvalidHandle(HWND),
    #[error("Window {0:?} has no parent")]
    NoParent(HWND),
    #[error("Failed to get info for window {0:?}")]
    InfoFailed(HWND),
    #[error("Failed to position window {0:?}")]
    PositionFailed(HWND),
}

/// Returns the parent of a child window
pub fn parent_of(hwnd: HWND) -> Result<HWND, WindowError> {
    unsafe {
        if !IsWindow(hwnd).as_bool() {
            return Err(WindowError::InvalidHandle(hwnd));
        }
        let parent = GetParent(hwnd);
        if parent.0 == 0 {
            return Err(WindowError::NoParent(hwnd));
        }
        Ok(parent)
    }
}

/// Client-area size of a window
pub fn client_size(hwnd: HWND) -> Result<Size, WindowError> {
    let mut rect = RECT::default();
    unsafe {
        if GetClientRect(hwnd, &mut rect).is_err() {
            return Err(WindowError::InfoFailed(hwnd));
        }
    }
    Ok(win32_rect_size(&rect))
}

/// Current bounds of a child window in its parent's client coordinates
pub fn child_bounds(hwnd: HWND) -> Result<Rect, WindowError> {
    let parent = parent_of(hwnd)?;
    let mut rect = RECT::default();
    unsafe {
        if GetWindowRect(hwnd, &mut rect).is_err() {
            return Err(WindowError::InfoFailed(hwnd));
        }
        // Screen -> parent client coordinates, both corners at once
        let mut corners = [
            POINT {
                x: rect.left,
                y: rect.top,
            },
            POINT {
                x: rect.right,
                y: rect.bottom,
            },
        ];
        windows::Win32::Graphics::Gdi::MapWindowPoints(HWND(0), parent, &mut corners);
        rect = RECT {
            left: corners[0].x,
            top: corners[0].y,
            right: corners[1].x,
            bottom: corners[1].y,
        };
    }
    Ok(win32_rect_to_rect(&rect))
}

/// Moves and resizes a window without changing focus or Z-order
pub fn position_window(hwnd: HWND, target: Rect) -> Result<(), WindowError> {
    unsafe {
        if !IsWindow(hwnd).as_bool() {
            return Err(WindowError::InvalidHandle(hwnd));
        }

        // SWP_NOACTIVATE: Don't activate the window (preserve focus)
        // SWP_NOZORDER: Don't change Z-order position (HWND parameter ignored)
        SetWindowPos(
            hwnd,
            HWND(0),
            target.x,
            target.y,
            target.width,
            target.height,
            SWP_NOACTIVATE | SWP_NOZORDER,
        )
        .map_err(|_| WindowError::PositionFailed(hwnd))
    }
}

/// [`Host`] backed by a Win32 child window
#[derive(Debug, Clone, Copy)]
pub struct ChildWindowHost {
    hwnd: HWND,
}

impl ChildWindowHost {
    /// Wraps a child window handle
    ///
    /// # Returns
    /// The host, or [`WindowError::InvalidHandle`] if `hwnd` is not a window
    pub fn new(hwnd: HWND) -> Result<Self, WindowError> {
        unsafe {
            if !IsWindow(hwnd).as_bool() {
                return Err(WindowError::InvalidHandle(hwnd));
            }
        }
        Ok(Self { hwnd })
    }

    /// Handle of the hosted child window
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Bounds to seed a controller with
    pub fn current_bounds(&self) -> Result<Rect, WindowError> {
        child_bounds(self.hwnd)
    }
}

impl Host for ChildWindowHost {
    fn set_cursor(&mut self, hint: CursorHint) {
        if let Err(e) = apply_cursor(hint) {
            tracing::warn!(?hint, "failed to load cursor: {e}");
        }
    }

    fn commit_bounds(&mut self, bounds: Rect) {
        if let Err(e) = position_window(self.hwnd, bounds) {
            tracing::warn!(?bounds, "{e}");
        }
    }

    fn request_parent_repaint_and_relayout(&mut self) {
        match parent_of(self.hwnd) {
            Ok(parent) => unsafe {
                InvalidateRect(parent, None, true);
            },
            Err(e) => tracing::debug!("{e}"),
        }
    }

    fn parent_size(&self) -> Option<Size> {
        parent_of(self.hwnd)
            .and_then(client_size)
            .map_err(|e| tracing::debug!("{e}"))
            .ok()
    }
}
