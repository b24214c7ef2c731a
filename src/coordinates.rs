/// A point on the virtual desktop, in physical pixels.
///
/// The origin is the top-left corner of the primary display; monitors to
/// the left of or above it have negative coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point in desktop coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle on the virtual desktop, in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from its edges, the way Win32 `RECT` stores them.
    #[inline]
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }

    /// The top-left corner.
    #[inline]
    pub fn position(&self) -> Point {
        Point { x: self.x, y: self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_edges() {
        let rect = Rect::from_ltrb(-1920, 0, 0, 1080);
        assert_eq!(rect, Rect::new(-1920, 0, 1920, 1080));
        assert_eq!(rect.position(), Point::new(-1920, 0));
    }
}
