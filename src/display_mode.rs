use crate::Point;

/// Screen rotation relative to the panel's native orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    LandscapeFlipped,
    PortraitFlipped,
}

impl Orientation {
    /// The rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Landscape => 0,
            Orientation::Portrait => 90,
            Orientation::LandscapeFlipped => 180,
            Orientation::PortraitFlipped => 270,
        }
    }
}

/// A display mode: resolution, color depth, refresh rate, desktop position
/// and rotation.
///
/// Two modes are equal only when every field matches; the mode listings
/// rely on that to recognize the active mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    /// Vertical refresh in Hz. 0 and 1 both mean the hardware default.
    pub refresh_rate: u32,
    /// Desktop position of this display's top-left corner.
    pub position: Point,
    pub orientation: Orientation,
    /// Raw display flags (interlaced, grayscale).
    pub display_flags: u32,
}

/// Find the first mode with the requested shape, ignoring position,
/// rotation and flags.
pub fn find_mode(
    modes: &[DisplayMode],
    width: u32,
    height: u32,
    bits_per_pixel: u32,
    refresh_rate: u32,
) -> Option<usize> {
    modes.iter().position(|mode| {
        mode.width == width
            && mode.height == height
            && mode.bits_per_pixel == bits_per_pixel
            && mode.refresh_rate == refresh_rate
    })
}

/// Swap the entry equal to `current` to the front of a mode listing.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn promote_current(modes: &mut [DisplayMode], current: &DisplayMode) {
    if let Some(index) = modes.iter().position(|mode| mode == current) {
        modes.swap(0, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(width: u32, height: u32, refresh_rate: u32, position: Point) -> DisplayMode {
        DisplayMode {
            width,
            height,
            bits_per_pixel: 32,
            refresh_rate,
            position,
            orientation: Orientation::Landscape,
            display_flags: 0,
        }
    }

    #[test]
    fn finds_a_mode_by_shape() {
        let modes = [
            mode(1280, 720, 60, Point::new(0, 0)),
            mode(1920, 1080, 60, Point::new(0, 0)),
            mode(1920, 1080, 144, Point::new(0, 0)),
        ];
        assert_eq!(find_mode(&modes, 1920, 1080, 32, 144), Some(2));
        assert_eq!(find_mode(&modes, 1920, 1080, 32, 60), Some(1));
    }

    #[test]
    fn misses_when_any_field_differs() {
        let modes = [mode(1920, 1080, 60, Point::new(0, 0))];
        assert_eq!(find_mode(&modes, 1920, 1080, 16, 60), None);
        assert_eq!(find_mode(&modes, 1920, 1080, 32, 75), None);
    }

    #[test]
    fn current_mode_moves_to_front() {
        let current = mode(1920, 1080, 60, Point::new(1920, 0));
        let mut modes = vec![
            mode(1280, 720, 60, Point::new(0, 0)),
            // Same shape at a different desktop position; not the active one.
            mode(1920, 1080, 60, Point::new(0, 0)),
            current,
        ];
        promote_current(&mut modes, &current);
        assert_eq!(modes[0], current);
        assert_eq!(modes[2], mode(1280, 720, 60, Point::new(0, 0)));
    }

    #[test]
    fn unknown_current_leaves_order_alone() {
        let mut modes = vec![mode(1280, 720, 60, Point::new(0, 0))];
        let elsewhere = mode(1280, 720, 75, Point::new(0, 0));
        promote_current(&mut modes, &elsewhere);
        assert_eq!(modes[0], mode(1280, 720, 60, Point::new(0, 0)));
    }

    #[test]
    fn orientation_degrees() {
        assert_eq!(Orientation::Landscape.degrees(), 0);
        assert_eq!(Orientation::Portrait.degrees(), 90);
        assert_eq!(Orientation::LandscapeFlipped.degrees(), 180);
        assert_eq!(Orientation::PortraitFlipped.degrees(), 270);
    }
}
