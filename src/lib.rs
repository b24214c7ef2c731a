#[cfg(target_os = "windows")]
mod win;
#[cfg(target_os = "windows")]
pub use win::*;

mod coordinates;
mod device;
mod display_mode;
mod dpi;
mod error;
mod monitor;

pub use coordinates::{Point, Rect};
pub use device::DisplayDevice;
pub use display_mode::{find_mode, DisplayMode, Orientation};
pub use dpi::{
    dpi_from_wparam, scale_factor, scale_point, scale_rect, scale_value, DpiApiGeneration,
    DpiAwareness, DEFAULT_DPI,
};
pub use error::{DpiError, FullscreenError, ModeChangeError};
pub use monitor::Monitor;
