use std::ffi::c_void;

use libloading::Library;
use windows_sys::core::{BOOL, HRESULT};
use windows_sys::Win32::Foundation::{HANDLE, HWND};
use windows_sys::Win32::Graphics::Gdi::HMONITOR;
use windows_sys::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT, MONITOR_DPI_TYPE, PROCESS_DPI_AWARENESS,
};

use crate::DpiApiGeneration;

pub(crate) type SetThreadDpiAwarenessContextFn =
    unsafe extern "system" fn(context: DPI_AWARENESS_CONTEXT) -> DPI_AWARENESS_CONTEXT;
pub(crate) type GetThreadDpiAwarenessContextFn =
    unsafe extern "system" fn() -> DPI_AWARENESS_CONTEXT;
pub(crate) type AreDpiAwarenessContextsEqualFn =
    unsafe extern "system" fn(a: DPI_AWARENESS_CONTEXT, b: DPI_AWARENESS_CONTEXT) -> BOOL;
pub(crate) type GetDpiForWindowFn = unsafe extern "system" fn(hwnd: HWND) -> u32;
pub(crate) type EnableNonClientDpiScalingFn = unsafe extern "system" fn(hwnd: HWND) -> BOOL;
pub(crate) type SystemParametersInfoForDpiFn = unsafe extern "system" fn(
    action: u32,
    param: u32,
    pv_param: *mut c_void,
    win_ini: u32,
    dpi: u32,
) -> BOOL;

pub(crate) type SetProcessDpiAwarenessFn =
    unsafe extern "system" fn(value: PROCESS_DPI_AWARENESS) -> HRESULT;
pub(crate) type GetProcessDpiAwarenessFn =
    unsafe extern "system" fn(process: HANDLE, value: *mut PROCESS_DPI_AWARENESS) -> HRESULT;
pub(crate) type GetDpiForMonitorFn = unsafe extern "system" fn(
    monitor: HMONITOR,
    dpi_type: MONITOR_DPI_TYPE,
    dpi_x: *mut u32,
    dpi_y: *mut u32,
) -> HRESULT;

/// The per-thread DPI awareness family from user32, Windows 10 1607 onward.
///
/// Binding the functions at runtime instead of import-linking them keeps
/// the binary loadable on older Windows versions, where the process falls
/// back to the older family or to plain 96 DPI values.
pub(crate) struct ThreadContextApi {
    pub set_thread_dpi_awareness_context: SetThreadDpiAwarenessContextFn,
    pub get_thread_dpi_awareness_context: GetThreadDpiAwarenessContextFn,
    pub are_dpi_awareness_contexts_equal: AreDpiAwarenessContextsEqualFn,
    pub get_dpi_for_window: GetDpiForWindowFn,
    pub enable_non_client_dpi_scaling: EnableNonClientDpiScalingFn,
    pub system_parameters_info_for_dpi: SystemParametersInfoForDpiFn,
    /// Monitor DPI queries still come from shcore; user32 has no
    /// point-to-DPI call of its own.
    pub monitor_dpi: Option<MonitorDpiApi>,
    _user32: Library,
}

impl ThreadContextApi {
    /// `None` unless every symbol of the family binds.
    pub fn load() -> Option<Self> {
        let user32 = unsafe { Library::new("user32.dll") }.ok()?;
        unsafe {
            let set_thread_dpi_awareness_context: SetThreadDpiAwarenessContextFn =
                *user32.get(b"SetThreadDpiAwarenessContext").ok()?;
            let get_thread_dpi_awareness_context: GetThreadDpiAwarenessContextFn =
                *user32.get(b"GetThreadDpiAwarenessContext").ok()?;
            let are_dpi_awareness_contexts_equal: AreDpiAwarenessContextsEqualFn =
                *user32.get(b"AreDpiAwarenessContextsEqual").ok()?;
            let get_dpi_for_window: GetDpiForWindowFn = *user32.get(b"GetDpiForWindow").ok()?;
            let enable_non_client_dpi_scaling: EnableNonClientDpiScalingFn =
                *user32.get(b"EnableNonClientDpiScaling").ok()?;
            let system_parameters_info_for_dpi: SystemParametersInfoForDpiFn =
                *user32.get(b"SystemParametersInfoForDpi").ok()?;

            Some(Self {
                set_thread_dpi_awareness_context,
                get_thread_dpi_awareness_context,
                are_dpi_awareness_contexts_equal,
                get_dpi_for_window,
                enable_non_client_dpi_scaling,
                system_parameters_info_for_dpi,
                monitor_dpi: MonitorDpiApi::load(),
                _user32: user32,
            })
        }
    }
}

/// Per-monitor DPI queries from shcore, Windows 8.1 onward.
pub(crate) struct MonitorDpiApi {
    pub get_dpi_for_monitor: GetDpiForMonitorFn,
    _shcore: Library,
}

impl MonitorDpiApi {
    pub fn load() -> Option<Self> {
        let shcore = unsafe { Library::new("shcore.dll") }.ok()?;
        unsafe {
            let get_dpi_for_monitor: GetDpiForMonitorFn =
                *shcore.get(b"GetDpiForMonitor").ok()?;
            Some(Self { get_dpi_for_monitor, _shcore: shcore })
        }
    }
}

/// The process-wide DPI awareness family from shcore, Windows 8.1 onward.
pub(crate) struct ProcessWideApi {
    pub set_process_dpi_awareness: SetProcessDpiAwarenessFn,
    pub get_process_dpi_awareness: GetProcessDpiAwarenessFn,
    pub get_dpi_for_monitor: GetDpiForMonitorFn,
    _shcore: Library,
}

impl ProcessWideApi {
    /// `None` unless every symbol of the family binds.
    pub fn load() -> Option<Self> {
        let shcore = unsafe { Library::new("shcore.dll") }.ok()?;
        unsafe {
            let set_process_dpi_awareness: SetProcessDpiAwarenessFn =
                *shcore.get(b"SetProcessDpiAwareness").ok()?;
            let get_process_dpi_awareness: GetProcessDpiAwarenessFn =
                *shcore.get(b"GetProcessDpiAwareness").ok()?;
            let get_dpi_for_monitor: GetDpiForMonitorFn =
                *shcore.get(b"GetDpiForMonitor").ok()?;

            Some(Self {
                set_process_dpi_awareness,
                get_process_dpi_awareness,
                get_dpi_for_monitor,
                _shcore: shcore,
            })
        }
    }
}

/// The DPI API family resolved for this process.
pub(crate) enum DpiApi {
    ThreadContext(ThreadContextApi),
    ProcessWide(ProcessWideApi),
    /// Pre-8.1 system; every DPI query reports the 96 DPI default.
    Unsupported,
}

impl DpiApi {
    /// Probe for the newest family first. Never fails; a system without
    /// either family resolves to `Unsupported`.
    pub fn load() -> Self {
        if let Some(api) = ThreadContextApi::load() {
            return DpiApi::ThreadContext(api);
        }
        if let Some(api) = ProcessWideApi::load() {
            return DpiApi::ProcessWide(api);
        }
        DpiApi::Unsupported
    }

    pub fn generation(&self) -> DpiApiGeneration {
        match self {
            DpiApi::ThreadContext(_) => DpiApiGeneration::ThreadContext,
            DpiApi::ProcessWide(_) => DpiApiGeneration::ProcessWide,
            DpiApi::Unsupported => DpiApiGeneration::Unsupported,
        }
    }
}
