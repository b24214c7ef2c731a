use crate::{Point, Rect};

/// The DPI everything falls back to when the system cannot report one.
///
/// Lengths are authored against this value; scaling maps them to the
/// actual DPI of a display.
pub const DEFAULT_DPI: u32 = 96;

/// A DPI awareness level, as requested from or reported by the system.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DpiAwareness {
    /// The process renders at 96 DPI and the system stretches the output.
    Unaware,
    /// The system DPI is read once at startup from the primary display.
    SystemAware,
    /// DPI is tracked per monitor as windows move between displays.
    PerMonitorAware,
}

/// Which generation of the Windows DPI API the running system exposes.
///
/// Probed once per process the first time any DPI operation runs; the
/// answer never changes afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DpiApiGeneration {
    /// Windows 10 1607 onward: awareness is a per-thread context.
    ThreadContext,
    /// Windows 8.1 onward: awareness is a process-wide setting that the
    /// OS accepts once per process.
    ProcessWide,
    /// No DPI awareness API; every query reports [`DEFAULT_DPI`].
    Unsupported,
}

/// Scale an integer length authored at 96 DPI to the given DPI.
///
/// Rounds half away from zero, matching Win32 `MulDiv`. The identity at
/// 96 DPI is exact; scaling is not reversible in general because distinct
/// inputs can round to the same output.
pub fn scale_value(value: i32, dpi: u32) -> i32 {
    let num = i64::from(value) * i64::from(dpi);
    let den = i64::from(DEFAULT_DPI);
    let scaled = if num >= 0 { (num + den / 2) / den } else { (num - den / 2) / den };
    scaled as i32
}

/// Scale a rectangle's position and size from 96 DPI to the given DPI.
pub fn scale_rect(rect: Rect, dpi: u32) -> Rect {
    Rect {
        x: scale_value(rect.x, dpi),
        y: scale_value(rect.y, dpi),
        width: scale_value(rect.width, dpi),
        height: scale_value(rect.height, dpi),
    }
}

/// Scale a point from 96 DPI to the given DPI.
pub fn scale_point(point: Point, dpi: u32) -> Point {
    Point { x: scale_value(point.x, dpi), y: scale_value(point.y, dpi) }
}

/// The fractional scale factor for a DPI: 96 maps to 1.0, 144 to 1.5.
pub fn scale_factor(dpi: u32) -> f64 {
    f64::from(dpi) / f64::from(DEFAULT_DPI)
}

/// Extract the new DPI from a `WM_DPICHANGED` wparam.
///
/// Both words carry a DPI; the X value in the low word is the one that
/// matters, as the axes are always equal.
pub fn dpi_from_wparam(wparam: usize) -> u32 {
    (wparam & 0xFFFF) as u16 as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_default_dpi() {
        for value in [-5000, -100, -1, 0, 1, 7, 100, 5000] {
            assert_eq!(scale_value(value, DEFAULT_DPI), value);
        }
    }

    #[test]
    fn known_scale_ratios() {
        assert_eq!(scale_value(100, 120), 125);
        assert_eq!(scale_value(100, 144), 150);
        assert_eq!(scale_value(100, 192), 200);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 7 * 120 / 96 = 8.75 and 2 * 120 / 96 = 2.5.
        assert_eq!(scale_value(7, 120), 9);
        assert_eq!(scale_value(2, 120), 3);
        assert_eq!(scale_value(-7, 120), -9);
        assert_eq!(scale_value(-2, 120), -3);
    }

    #[test]
    fn monotonic_in_dpi() {
        let mut previous = 0;
        for dpi in 96..=192 {
            let scaled = scale_value(100, dpi);
            assert!(scaled >= previous);
            previous = scaled;
        }
    }

    #[test]
    fn scaling_loses_information() {
        // Distinct inputs can collide, so no inverse mapping exists.
        assert_eq!(scale_value(1, 48), scale_value(2, 48));
    }

    #[test]
    fn rect_and_point_scale_each_coordinate() {
        let rect = scale_rect(Rect::new(10, -10, 100, 200), 144);
        assert_eq!(rect, Rect::new(15, -15, 150, 300));
        assert_eq!(scale_point(Point::new(64, 32), 120), Point::new(80, 40));
    }

    #[test]
    fn scale_factor_ratios() {
        assert_eq!(scale_factor(96), 1.0);
        assert_eq!(scale_factor(144), 1.5);
        assert_eq!(scale_factor(288), 3.0);
    }

    #[test]
    fn wparam_low_word_is_the_dpi() {
        assert_eq!(dpi_from_wparam(0x0060_0060), 96);
        assert_eq!(dpi_from_wparam(0x0090_0090), 144);
    }
}
