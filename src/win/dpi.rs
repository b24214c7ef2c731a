use std::ffi::c_void;
use std::mem;
use std::ptr;
use std::sync::OnceLock;

use raw_window_handle::HasRawWindowHandle;
use tracing::{debug, warn};
use windows_sys::Win32::Foundation::{POINT, S_OK};
use windows_sys::Win32::Graphics::Gdi::{
    CreateFontIndirectW, GetObjectW, MonitorFromPoint, MonitorFromWindow, HFONT, HMONITOR,
    LOGFONTW, MONITOR_DEFAULTTONEAREST,
};
use windows_sys::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE,
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, DPI_AWARENESS_CONTEXT_SYSTEM_AWARE,
    DPI_AWARENESS_CONTEXT_UNAWARE, MDT_EFFECTIVE_DPI, PROCESS_DPI_UNAWARE,
    PROCESS_PER_MONITOR_DPI_AWARE, PROCESS_SYSTEM_DPI_AWARE,
};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    NONCLIENTMETRICSW, SPI_GETICONTITLELOGFONT, SPI_GETNONCLIENTMETRICS,
};

use crate::win::api::{DpiApi, GetDpiForMonitorFn, ThreadContextApi};
use crate::win::util::hwnd_from;
use crate::{scale_value, DpiApiGeneration, DpiAwareness, DpiError, Point, DEFAULT_DPI};

static DPI_API: OnceLock<DpiApi> = OnceLock::new();

/// The resolved API family for this process. The first call probes the
/// system; every later call returns the same value, including from
/// concurrent threads.
pub(crate) fn api() -> &'static DpiApi {
    DPI_API.get_or_init(|| {
        let api = DpiApi::load();
        debug!(generation = ?api.generation(), "resolved DPI API family");
        api
    })
}

/// Report which DPI API generation the system exposes.
///
/// The probe runs once per process; the answer never changes afterwards.
pub fn dpi_api_generation() -> DpiApiGeneration {
    api().generation()
}

/// The DPI of the display a window is on.
///
/// Never fails: a non-Win32 handle, an invalid window or a system without
/// DPI APIs all report [`DEFAULT_DPI`].
pub fn dpi_for_window(window: &impl HasRawWindowHandle) -> u32 {
    let Some(hwnd) = hwnd_from(window) else {
        return DEFAULT_DPI;
    };
    match api() {
        DpiApi::ThreadContext(tc) => {
            let dpi = unsafe { (tc.get_dpi_for_window)(hwnd) };
            if dpi == 0 {
                DEFAULT_DPI
            } else {
                dpi
            }
        }
        DpiApi::ProcessWide(pw) => {
            let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
            monitor_dpi(pw.get_dpi_for_monitor, monitor).unwrap_or(DEFAULT_DPI)
        }
        DpiApi::Unsupported => DEFAULT_DPI,
    }
}

/// The DPI of the display containing (or nearest to) a desktop point.
///
/// Never fails; degrades to [`DEFAULT_DPI`].
pub fn dpi_at(point: Point) -> u32 {
    let point = POINT { x: point.x, y: point.y };
    let monitor = unsafe { MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST) };
    match api() {
        DpiApi::ThreadContext(tc) => tc
            .monitor_dpi
            .as_ref()
            .and_then(|shcore| monitor_dpi(shcore.get_dpi_for_monitor, monitor))
            .unwrap_or(DEFAULT_DPI),
        DpiApi::ProcessWide(pw) => {
            monitor_dpi(pw.get_dpi_for_monitor, monitor).unwrap_or(DEFAULT_DPI)
        }
        DpiApi::Unsupported => DEFAULT_DPI,
    }
}

fn monitor_dpi(get_dpi_for_monitor: GetDpiForMonitorFn, monitor: HMONITOR) -> Option<u32> {
    let mut dpi_x = 0u32;
    let mut dpi_y = 0u32;
    let hr = unsafe { get_dpi_for_monitor(monitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y) };
    (hr == S_OK && dpi_x != 0).then_some(dpi_x)
}

/// Request a DPI awareness level, verifying the result by reading it back.
///
/// On the thread-context family this sets the *calling thread's* context;
/// per-monitor awareness prefers the V2 context and falls back to V1. On
/// the process-wide family the OS accepts the first assignment for the
/// lifetime of the process, so a later conflicting request fails read-back
/// and returns [`DpiError::AwarenessRejected`].
pub fn set_dpi_awareness(level: DpiAwareness) -> Result<(), DpiError> {
    match api() {
        DpiApi::ThreadContext(tc) => {
            let candidates = match level {
                DpiAwareness::PerMonitorAware => [
                    Some(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2),
                    Some(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE),
                ],
                DpiAwareness::SystemAware => [Some(DPI_AWARENESS_CONTEXT_SYSTEM_AWARE), None],
                DpiAwareness::Unaware => [Some(DPI_AWARENESS_CONTEXT_UNAWARE), None],
            };
            for context in candidates.into_iter().flatten() {
                unsafe { (tc.set_thread_dpi_awareness_context)(context) };
                let current = unsafe { (tc.get_thread_dpi_awareness_context)() };
                if context_level(tc, current) == Some(level) {
                    return Ok(());
                }
            }
            warn!(?level, "thread DPI awareness request was not honored");
            Err(DpiError::AwarenessRejected)
        }
        DpiApi::ProcessWide(pw) => {
            let value = match level {
                DpiAwareness::Unaware => PROCESS_DPI_UNAWARE,
                DpiAwareness::SystemAware => PROCESS_SYSTEM_DPI_AWARE,
                DpiAwareness::PerMonitorAware => PROCESS_PER_MONITOR_DPI_AWARE,
            };
            unsafe { (pw.set_process_dpi_awareness)(value) };
            let mut current = PROCESS_DPI_UNAWARE;
            let hr = unsafe { (pw.get_process_dpi_awareness)(ptr::null_mut(), &mut current) };
            if hr == S_OK && current == value {
                return Ok(());
            }
            warn!(?level, "process DPI awareness request was not honored");
            Err(DpiError::AwarenessRejected)
        }
        DpiApi::Unsupported => Err(DpiError::Unsupported),
    }
}

/// The current DPI awareness level, when the system can report one.
///
/// On the thread-context family this reads the calling thread's context.
pub fn dpi_awareness() -> Option<DpiAwareness> {
    match api() {
        DpiApi::ThreadContext(tc) => {
            let current = unsafe { (tc.get_thread_dpi_awareness_context)() };
            context_level(tc, current)
        }
        DpiApi::ProcessWide(pw) => {
            let mut current = PROCESS_DPI_UNAWARE;
            let hr = unsafe { (pw.get_process_dpi_awareness)(ptr::null_mut(), &mut current) };
            if hr != S_OK {
                return None;
            }
            match current {
                PROCESS_DPI_UNAWARE => Some(DpiAwareness::Unaware),
                PROCESS_SYSTEM_DPI_AWARE => Some(DpiAwareness::SystemAware),
                PROCESS_PER_MONITOR_DPI_AWARE => Some(DpiAwareness::PerMonitorAware),
                _ => None,
            }
        }
        DpiApi::Unsupported => None,
    }
}

/// Map a thread awareness context to a level, when it corresponds to one.
///
/// Contexts are opaque handles; `AreDpiAwarenessContextsEqual` is the only
/// valid comparison.
fn context_level(tc: &ThreadContextApi, context: DPI_AWARENESS_CONTEXT) -> Option<DpiAwareness> {
    let equal = |known: DPI_AWARENESS_CONTEXT| {
        (unsafe { (tc.are_dpi_awareness_contexts_equal)(context, known) }) != 0
    };
    if equal(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2)
        || equal(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE)
    {
        Some(DpiAwareness::PerMonitorAware)
    } else if equal(DPI_AWARENESS_CONTEXT_SYSTEM_AWARE) {
        Some(DpiAwareness::SystemAware)
    } else if equal(DPI_AWARENESS_CONTEXT_UNAWARE) {
        Some(DpiAwareness::Unaware)
    } else {
        None
    }
}

/// Ask the system to scale a window's non-client area with its DPI.
///
/// Meant to be called while handling `WM_NCCREATE` on a per-monitor-aware
/// (V1) window; V2 windows already get this and the call then reports
/// rejection. Only the thread-context family has the API.
pub fn enable_non_client_dpi_scaling(window: &impl HasRawWindowHandle) -> Result<(), DpiError> {
    let Some(hwnd) = hwnd_from(window) else {
        return Err(DpiError::Unsupported);
    };
    match api() {
        DpiApi::ThreadContext(tc) => {
            if unsafe { (tc.enable_non_client_dpi_scaling)(hwnd) } != 0 {
                Ok(())
            } else {
                Err(DpiError::AwarenessRejected)
            }
        }
        _ => Err(DpiError::Unsupported),
    }
}

/// The icon title logical font scaled for a DPI.
///
/// `None` on the families without `SystemParametersInfoForDpi`.
pub fn icon_title_font_for_dpi(dpi: u32) -> Option<LOGFONTW> {
    let DpiApi::ThreadContext(tc) = api() else {
        return None;
    };
    let mut font: LOGFONTW = unsafe { mem::zeroed() };
    let ok = unsafe {
        (tc.system_parameters_info_for_dpi)(
            SPI_GETICONTITLELOGFONT,
            mem::size_of::<LOGFONTW>() as u32,
            &mut font as *mut LOGFONTW as *mut c_void,
            0,
            dpi,
        )
    };
    (ok != 0).then_some(font)
}

/// Non-client metrics (caption, menu and message fonts, border widths)
/// scaled for a DPI.
///
/// `None` on the families without `SystemParametersInfoForDpi`.
pub fn non_client_metrics_for_dpi(dpi: u32) -> Option<NONCLIENTMETRICSW> {
    let DpiApi::ThreadContext(tc) = api() else {
        return None;
    };
    let mut metrics: NONCLIENTMETRICSW = unsafe { mem::zeroed() };
    metrics.cbSize = mem::size_of::<NONCLIENTMETRICSW>() as u32;
    let ok = unsafe {
        (tc.system_parameters_info_for_dpi)(
            SPI_GETNONCLIENTMETRICS,
            metrics.cbSize,
            &mut metrics as *mut NONCLIENTMETRICSW as *mut c_void,
            0,
            dpi,
        )
    };
    (ok != 0).then_some(metrics)
}

/// Create a copy of a GDI font with its height scaled for a DPI.
///
/// The caller owns the returned font and frees it with `DeleteObject`.
pub fn scale_font(font: HFONT, dpi: u32) -> Option<HFONT> {
    let mut log_font: LOGFONTW = unsafe { mem::zeroed() };
    let read = unsafe {
        GetObjectW(
            font,
            mem::size_of::<LOGFONTW>() as i32,
            &mut log_font as *mut LOGFONTW as *mut c_void,
        )
    };
    if read == 0 {
        return None;
    }
    // Negative height selects fonts by character height; keep that
    // convention regardless of the sign that came in.
    log_font.lfHeight = -scale_value(log_font.lfHeight.abs(), dpi);
    let scaled = unsafe { CreateFontIndirectW(&log_font) };
    (!scaled.is_null()).then_some(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_resolves_once() {
        assert_eq!(dpi_api_generation(), dpi_api_generation());
    }

    #[test]
    fn point_dpi_is_always_usable() {
        assert_ne!(dpi_at(Point::new(0, 0)), 0);
        // Far off the desktop still resolves to the nearest monitor.
        assert_ne!(dpi_at(Point::new(i32::MIN / 2, i32::MAX / 2)), 0);
    }
}
