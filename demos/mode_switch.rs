//! Switch the first active display to one of its modes for five seconds,
//! then put the registry mode back. Pass a mode index from the enumerate
//! demo's listing.

#[cfg(target_os = "windows")]
fn main() {
    use std::thread::sleep;
    use std::time::Duration;

    use dispview::{apply_mode_fullscreen, display_devices, display_modes, reset_display_mode};

    let mode_index: usize = match std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        Some(index) => index,
        None => {
            eprintln!("usage: mode_switch <mode-index>");
            return;
        }
    };

    let Some(device) =
        display_devices().into_iter().find(|device| device.is_active && !device.is_mirroring)
    else {
        eprintln!("no active display device");
        return;
    };

    let modes = display_modes(&device.name);
    let Some(mode) = modes.get(mode_index) else {
        eprintln!("{} has {} modes; index {mode_index} is out of range", device.name, modes.len());
        return;
    };

    println!(
        "Switching {} to {}x{} @{}Hz for five seconds...",
        device.name, mode.width, mode.height, mode.refresh_rate
    );
    if let Err(err) = apply_mode_fullscreen(Some(&device.name), mode) {
        eprintln!("mode change failed: {err}");
        return;
    }
    sleep(Duration::from_secs(5));

    if let Err(err) = reset_display_mode(Some(&device.name)) {
        eprintln!("restoring the previous mode failed: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
