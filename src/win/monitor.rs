use std::mem;
use std::ptr;

use windows_sys::core::BOOL;
use windows_sys::Win32::Foundation::{LPARAM, POINT, RECT, TRUE};
use windows_sys::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, MonitorFromPoint, HDC, HMONITOR, MONITORINFO,
    MONITORINFOEXW, MONITOR_DEFAULTTONEAREST,
};
use windows_sys::Win32::UI::WindowsAndMessaging::MONITORINFOF_PRIMARY;

use crate::monitor::promote_primary;
use crate::win::util::from_wstr;
use crate::{Monitor, Point, Rect};

/// All connected monitors, primary first.
pub fn monitors() -> Vec<Monitor> {
    let mut handles: Vec<HMONITOR> = Vec::new();
    unsafe {
        EnumDisplayMonitors(
            ptr::null_mut(),
            ptr::null(),
            Some(push_monitor),
            &mut handles as *mut Vec<HMONITOR> as LPARAM,
        );
    }
    let mut monitors: Vec<Monitor> =
        handles.into_iter().filter_map(monitor_info).collect();
    promote_primary(&mut monitors, |monitor| monitor.is_primary);
    monitors
}

unsafe extern "system" fn push_monitor(
    monitor: HMONITOR,
    _dc: HDC,
    _bounds: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let handles = &mut *(data as *mut Vec<HMONITOR>);
    handles.push(monitor);
    TRUE
}

/// The monitor hosting the desktop origin.
pub fn primary_monitor() -> Option<Monitor> {
    monitors().into_iter().find(|monitor| monitor.is_primary)
}

/// The monitor containing (or nearest to) a desktop point.
pub fn monitor_at(point: Point) -> Option<Monitor> {
    let point = POINT { x: point.x, y: point.y };
    let monitor = unsafe { MonitorFromPoint(point, MONITOR_DEFAULTTONEAREST) };
    if monitor.is_null() {
        return None;
    }
    monitor_info(monitor)
}

fn monitor_info(monitor: HMONITOR) -> Option<Monitor> {
    let mut info: MONITORINFOEXW = unsafe { mem::zeroed() };
    info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;
    let ok =
        unsafe { GetMonitorInfoW(monitor, &mut info as *mut MONITORINFOEXW as *mut MONITORINFO) };
    if ok == 0 {
        return None;
    }
    Some(Monitor {
        device_name: from_wstr(&info.szDevice),
        bounds: rect_from(info.monitorInfo.rcMonitor),
        work_area: rect_from(info.monitorInfo.rcWork),
        is_primary: info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
    })
}

fn rect_from(rect: RECT) -> Rect {
    Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
}
