use std::mem;
use std::ptr;

use tracing::debug;
use windows_sys::Win32::Graphics::Gdi::{
    ChangeDisplaySettingsExW, EnumDisplaySettingsExW, CDS_FULLSCREEN, DEVMODEW, DMDO_180,
    DMDO_270, DMDO_90, DM_BITSPERPEL, DM_DISPLAYFREQUENCY, DM_PELSHEIGHT, DM_PELSWIDTH,
    EDS_RAWMODE, EDS_ROTATEDMODE, ENUM_CURRENT_SETTINGS,
};

use crate::display_mode::promote_current;
use crate::win::util::to_wstr;
use crate::{DisplayMode, ModeChangeError, Orientation, Point};

/// Every mode a device supports, with the active mode swapped to the front
/// when it appears in the listing.
///
/// Device names come from the device and monitor enumerations.
pub fn display_modes(device: &str) -> Vec<DisplayMode> {
    modes_with_flags(device, 0)
}

/// Modes as the driver reports them, without rotation applied.
pub fn raw_display_modes(device: &str) -> Vec<DisplayMode> {
    modes_with_flags(device, EDS_RAWMODE)
}

/// Modes for every rotation the device supports.
pub fn rotated_display_modes(device: &str) -> Vec<DisplayMode> {
    modes_with_flags(device, EDS_ROTATEDMODE)
}

/// The mode a device is currently showing.
pub fn current_display_mode(device: &str) -> Option<DisplayMode> {
    current_mode_raw(&to_wstr(device))
}

/// Switch a device to a mode. `None` targets the primary display.
///
/// The change is dynamic; the registry keeps the old mode and restores it
/// on the next boot.
pub fn apply_display_mode(device: Option<&str>, mode: &DisplayMode) -> Result<(), ModeChangeError> {
    debug!(?device, width = mode.width, height = mode.height, "applying display mode");
    change_settings(device, Some(&devmode_from(mode)), 0)
}

/// Switch a device to a mode for a fullscreen session.
///
/// The previous mode comes back when the process exits or calls
/// [`reset_display_mode`].
pub fn apply_mode_fullscreen(
    device: Option<&str>,
    mode: &DisplayMode,
) -> Result<(), ModeChangeError> {
    debug!(?device, width = mode.width, height = mode.height, "applying fullscreen display mode");
    change_settings(device, Some(&devmode_from(mode)), CDS_FULLSCREEN)
}

/// Return a device to the mode stored in the registry.
pub fn reset_display_mode(device: Option<&str>) -> Result<(), ModeChangeError> {
    debug!(?device, "restoring the registry display mode");
    change_settings(device, None, 0)
}

fn modes_with_flags(device: &str, flags: u32) -> Vec<DisplayMode> {
    let device = to_wstr(device);
    let mut modes = Vec::new();
    let mut index = 0u32;
    loop {
        let mut dm: DEVMODEW = unsafe { mem::zeroed() };
        dm.dmSize = mem::size_of::<DEVMODEW>() as u16;
        let ok = unsafe { EnumDisplaySettingsExW(device.as_ptr(), index, &mut dm, flags) };
        if ok == 0 {
            break;
        }
        modes.push(mode_from(&dm));
        index += 1;
    }
    if let Some(current) = current_mode_raw(&device) {
        promote_current(&mut modes, &current);
    }
    modes
}

fn current_mode_raw(device: &[u16]) -> Option<DisplayMode> {
    let mut dm: DEVMODEW = unsafe { mem::zeroed() };
    dm.dmSize = mem::size_of::<DEVMODEW>() as u16;
    let ok = unsafe { EnumDisplaySettingsExW(device.as_ptr(), ENUM_CURRENT_SETTINGS, &mut dm, 0) };
    (ok != 0).then(|| mode_from(&dm))
}

fn change_settings(
    device: Option<&str>,
    dev_mode: Option<&DEVMODEW>,
    flags: u32,
) -> Result<(), ModeChangeError> {
    let device = device.map(to_wstr);
    let device_ptr = device.as_ref().map_or(ptr::null(), |name| name.as_ptr());
    let mode_ptr = dev_mode.map_or(ptr::null(), |dm| dm as *const DEVMODEW);
    let status = unsafe {
        ChangeDisplaySettingsExW(device_ptr, mode_ptr, ptr::null_mut(), flags, ptr::null())
    };
    ModeChangeError::check(status)
}

fn mode_from(dm: &DEVMODEW) -> DisplayMode {
    // The display variant of the union holds for modes coming out of
    // EnumDisplaySettingsExW.
    let (position, orientation) = unsafe {
        let display = &dm.Anonymous1.Anonymous2;
        (
            Point::new(display.dmPosition.x, display.dmPosition.y),
            orientation_from(display.dmDisplayOrientation),
        )
    };
    DisplayMode {
        width: dm.dmPelsWidth,
        height: dm.dmPelsHeight,
        bits_per_pixel: dm.dmBitsPerPel,
        refresh_rate: dm.dmDisplayFrequency,
        position,
        orientation,
        display_flags: unsafe { dm.Anonymous2.dmDisplayFlags },
    }
}

fn devmode_from(mode: &DisplayMode) -> DEVMODEW {
    let mut dm: DEVMODEW = unsafe { mem::zeroed() };
    dm.dmSize = mem::size_of::<DEVMODEW>() as u16;
    dm.dmPelsWidth = mode.width;
    dm.dmPelsHeight = mode.height;
    dm.dmBitsPerPel = mode.bits_per_pixel;
    dm.dmDisplayFrequency = mode.refresh_rate;
    // Only the fields named here take part in the change.
    dm.dmFields = DM_PELSWIDTH | DM_PELSHEIGHT | DM_BITSPERPEL | DM_DISPLAYFREQUENCY;
    dm
}

fn orientation_from(dmdo: u32) -> Orientation {
    match dmdo {
        DMDO_90 => Orientation::Portrait,
        DMDO_180 => Orientation::LandscapeFlipped,
        DMDO_270 => Orientation::PortraitFlipped,
        _ => Orientation::Landscape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devmode_carries_only_the_shape_fields() {
        let mode = DisplayMode {
            width: 1920,
            height: 1080,
            bits_per_pixel: 32,
            refresh_rate: 144,
            position: Point::new(100, 100),
            orientation: Orientation::Portrait,
            display_flags: 0,
        };
        let dm = devmode_from(&mode);
        assert_eq!(dm.dmPelsWidth, 1920);
        assert_eq!(dm.dmPelsHeight, 1080);
        assert_eq!(dm.dmBitsPerPel, 32);
        assert_eq!(dm.dmDisplayFrequency, 144);
        assert_eq!(dm.dmFields, DM_PELSWIDTH | DM_PELSHEIGHT | DM_BITSPERPEL | DM_DISPLAYFREQUENCY);
    }

    #[test]
    fn orientation_codes_map_to_rotations() {
        assert_eq!(orientation_from(0), Orientation::Landscape);
        assert_eq!(orientation_from(DMDO_90), Orientation::Portrait);
        assert_eq!(orientation_from(DMDO_180), Orientation::LandscapeFlipped);
        assert_eq!(orientation_from(DMDO_270), Orientation::PortraitFlipped);
    }

    #[test]
    fn round_trips_through_devmode_keep_the_shape() {
        let mode = DisplayMode {
            width: 2560,
            height: 1440,
            bits_per_pixel: 32,
            refresh_rate: 60,
            position: Point::new(0, 0),
            orientation: Orientation::Landscape,
            display_flags: 0,
        };
        let back = mode_from(&devmode_from(&mode));
        assert_eq!(back.width, mode.width);
        assert_eq!(back.height, mode.height);
        assert_eq!(back.bits_per_pixel, mode.bits_per_pixel);
        assert_eq!(back.refresh_rate, mode.refresh_rate);
    }
}
