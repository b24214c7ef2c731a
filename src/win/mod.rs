mod api;
mod device;
mod dpi;
mod fullscreen;
mod mode;
mod monitor;
mod util;

pub use device::display_devices;
pub use dpi::{
    dpi_api_generation, dpi_at, dpi_awareness, dpi_for_window, enable_non_client_dpi_scaling,
    icon_title_font_for_dpi, non_client_metrics_for_dpi, scale_font, set_dpi_awareness,
};
pub use fullscreen::{restore_window, set_fullscreen, SavedPlacement};
pub use mode::{
    apply_display_mode, apply_mode_fullscreen, current_display_mode, display_modes,
    raw_display_modes, reset_display_mode, rotated_display_modes,
};
pub use monitor::{monitor_at, monitors, primary_monitor};
