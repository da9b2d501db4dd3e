//! Cursor hint to system cursor mapping

use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    LoadCursorW, SetCursor, IDC_ARROW, IDC_SIZEALL, IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE,
    IDC_SIZEWE,
};

use crate::domain::zone::CursorHint;

/// Returns the predefined Win32 cursor resource for a hint
///
/// Win32 has no per-edge cursors, so opposite edges and corners share one.
pub fn system_cursor_id(hint: CursorHint) -> PCWSTR {
    match hint {
        CursorHint::Default => IDC_ARROW,
        CursorHint::NResize | CursorHint::SResize => IDC_SIZENS,
        CursorHint::EResize | CursorHint::WResize => IDC_SIZEWE,
        CursorHint::NwResize | CursorHint::SeResize => IDC_SIZENWSE,
        CursorHint::NeResize | CursorHint::SwResize => IDC_SIZENESW,
        CursorHint::Move => IDC_SIZEALL,
    }
}

/// Loads and applies the system cursor for a hint
pub fn apply_cursor(hint: CursorHint) -> windows::core::Result<()> {
    unsafe {
        let cursor = LoadCursorW(None, system_cursor_id(hint))?;
        SetCursor(cursor);
    }
    Ok(())
}
