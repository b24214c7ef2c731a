//! Walk the display devices, monitors and modes and print what the system
//! reports, including which DPI API generation is in use.

#[cfg(target_os = "windows")]
fn main() {
    use dispview::{
        current_display_mode, display_devices, display_modes, dpi_api_generation, dpi_at,
        monitors, Point,
    };

    println!("DPI API generation: {:?}", dpi_api_generation());
    println!("DPI at the desktop origin: {}", dpi_at(Point::new(0, 0)));

    println!("\nDisplay devices:");
    for device in display_devices() {
        let mut flags = Vec::new();
        if device.is_primary {
            flags.push("primary");
        }
        if device.is_active {
            flags.push("active");
        }
        if device.is_mirroring {
            flags.push("mirror");
        }
        println!("  {} [{}] {}", device.name, flags.join(", "), device.description);
    }

    println!("\nMonitors:");
    for monitor in monitors() {
        let bounds = monitor.bounds;
        println!(
            "  {} at ({}, {}) {}x{}{}",
            monitor.device_name,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            if monitor.is_primary { " (primary)" } else { "" },
        );
    }

    let Some(device) =
        display_devices().into_iter().find(|device| device.is_active && !device.is_mirroring)
    else {
        println!("\nNo active display device found.");
        return;
    };

    println!("\nModes for {}:", device.name);
    for (index, mode) in display_modes(&device.name).iter().enumerate() {
        println!(
            "  [{index:3}] {}x{} {}bpp @{}Hz {:?}",
            mode.width, mode.height, mode.bits_per_pixel, mode.refresh_rate, mode.orientation,
        );
    }
    if let Some(current) = current_display_mode(&device.name) {
        println!("Current: {}x{} @{}Hz", current.width, current.height, current.refresh_rate);
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
