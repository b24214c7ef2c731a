use std::mem;
use std::ptr;

use windows_sys::Win32::Graphics::Gdi::{
    EnumDisplayDevicesW, DISPLAY_DEVICEW, DISPLAY_DEVICE_ATTACHED_TO_DESKTOP,
    DISPLAY_DEVICE_MIRRORING_DRIVER, DISPLAY_DEVICE_PRIMARY_DEVICE,
};

use crate::monitor::promote_primary;
use crate::win::util::from_wstr;
use crate::DisplayDevice;

/// All display adapters known to the system, primary first.
///
/// Inactive and mirroring pseudo-devices are included; check
/// [`DisplayDevice::is_active`] and [`DisplayDevice::is_mirroring`]
/// before targeting one with a mode change.
pub fn display_devices() -> Vec<DisplayDevice> {
    let mut devices = Vec::new();
    let mut index = 0u32;
    loop {
        let mut device: DISPLAY_DEVICEW = unsafe { mem::zeroed() };
        device.cb = mem::size_of::<DISPLAY_DEVICEW>() as u32;
        let ok = unsafe { EnumDisplayDevicesW(ptr::null(), index, &mut device, 0) };
        if ok == 0 {
            break;
        }
        devices.push(DisplayDevice {
            name: from_wstr(&device.DeviceName),
            description: from_wstr(&device.DeviceString),
            is_primary: device.StateFlags & DISPLAY_DEVICE_PRIMARY_DEVICE != 0,
            is_active: device.StateFlags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0,
            is_mirroring: device.StateFlags & DISPLAY_DEVICE_MIRRORING_DRIVER != 0,
        });
        index += 1;
    }
    promote_primary(&mut devices, |device| device.is_primary);
    devices
}
