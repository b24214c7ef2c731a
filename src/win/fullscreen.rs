use std::mem;
use std::ptr;

use raw_window_handle::HasRawWindowHandle;
use tracing::debug;
use windows_sys::Win32::Foundation::{RECT, TRUE};
use windows_sys::Win32::Graphics::Gdi::InvalidateRect;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetWindowLongW, GetWindowPlacement, SetWindowLongW, SetWindowPlacement, GWL_STYLE,
    SW_SHOWNORMAL, WINDOWPLACEMENT, WS_CAPTION,
};

use crate::win::mode::{apply_mode_fullscreen, reset_display_mode};
use crate::win::util::hwnd_from;
use crate::{DisplayMode, FullscreenError};

/// What [`set_fullscreen`] saved about a window, needed to undo the switch.
#[derive(Clone)]
pub struct SavedPlacement {
    placement: WINDOWPLACEMENT,
    style: i32,
    device: Option<String>,
}

/// Put a window into fullscreen at the given mode, switching the display.
///
/// `None` targets the primary display. The window loses its caption and is
/// moved to the display origin at the mode's size; the returned snapshot
/// undoes all of it through [`restore_window`]. On a mode-change failure
/// the window is left untouched.
pub fn set_fullscreen(
    window: &impl HasRawWindowHandle,
    device: Option<&str>,
    mode: &DisplayMode,
) -> Result<SavedPlacement, FullscreenError> {
    let Some(hwnd) = hwnd_from(window) else {
        return Err(FullscreenError::UnsupportedHandle);
    };

    let mut placement: WINDOWPLACEMENT = unsafe { mem::zeroed() };
    placement.length = mem::size_of::<WINDOWPLACEMENT>() as u32;
    if unsafe { GetWindowPlacement(hwnd, &mut placement) } == 0 {
        return Err(FullscreenError::Placement);
    }
    let style = unsafe { GetWindowLongW(hwnd, GWL_STYLE) };
    let saved = SavedPlacement {
        placement,
        style,
        device: device.map(str::to_owned),
    };

    apply_mode_fullscreen(device, mode)?;

    let mut fullscreen = placement;
    fullscreen.showCmd = SW_SHOWNORMAL as _;
    fullscreen.rcNormalPosition = RECT {
        left: mode.position.x,
        top: mode.position.y,
        right: mode.position.x + mode.width as i32,
        bottom: mode.position.y + mode.height as i32,
    };

    unsafe {
        SetWindowLongW(hwnd, GWL_STYLE, style & !(WS_CAPTION as i32));
        if SetWindowPlacement(hwnd, &fullscreen) == 0 {
            // Undo the mode switch; the window never made it to fullscreen.
            SetWindowLongW(hwnd, GWL_STYLE, style);
            let _ = reset_display_mode(device);
            return Err(FullscreenError::Placement);
        }
        InvalidateRect(hwnd, ptr::null(), TRUE);
    }
    debug!(width = mode.width, height = mode.height, "window switched to fullscreen");
    Ok(saved)
}

/// Undo [`set_fullscreen`]: leave the fullscreen mode and put the window's
/// style and placement back.
pub fn restore_window(
    window: &impl HasRawWindowHandle,
    saved: &SavedPlacement,
) -> Result<(), FullscreenError> {
    let Some(hwnd) = hwnd_from(window) else {
        return Err(FullscreenError::UnsupportedHandle);
    };

    reset_display_mode(saved.device.as_deref())?;

    unsafe {
        SetWindowLongW(hwnd, GWL_STYLE, saved.style);
        if SetWindowPlacement(hwnd, &saved.placement) == 0 {
            return Err(FullscreenError::Placement);
        }
        InvalidateRect(hwnd, ptr::null(), TRUE);
    }
    debug!("window restored from fullscreen");
    Ok(())
}
