/// A display adapter as reported by the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDevice {
    /// Device path, e.g. `\\.\DISPLAY1`. The mode and monitor operations
    /// accept this name.
    pub name: String,
    /// Human-readable adapter description.
    pub description: String,
    /// Whether this device hosts the desktop origin.
    pub is_primary: bool,
    /// Whether the device is attached to the desktop.
    pub is_active: bool,
    /// Whether this is a pseudo-device mirroring another display.
    pub is_mirroring: bool,
}
