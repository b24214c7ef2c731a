use crate::Rect;

/// A connected monitor and its placement on the virtual desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// The display device this monitor belongs to, e.g. `\\.\DISPLAY1`.
    pub device_name: String,
    /// Full monitor bounds in desktop coordinates.
    pub bounds: Rect,
    /// Bounds minus the taskbar and any docked toolbars.
    pub work_area: Rect,
    /// Whether this monitor hosts the desktop origin.
    pub is_primary: bool,
}

/// Swap the first entry matching the predicate to the front of the list.
///
/// Enumeration collections put the primary entry first this way; the rest
/// of the order is untouched apart from the displaced first element.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub(crate) fn promote_primary<T>(items: &mut [T], is_primary: impl Fn(&T) -> bool) {
    if let Some(index) = items.iter().position(|item| is_primary(item)) {
        items.swap(0, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_swapped_to_front() {
        let mut names = vec!["a", "b", "c", "d"];
        promote_primary(&mut names, |name| *name == "c");
        assert_eq!(names, ["c", "b", "a", "d"]);
    }

    #[test]
    fn front_primary_stays_put() {
        let mut names = vec!["a", "b"];
        promote_primary(&mut names, |name| *name == "a");
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn no_primary_leaves_order_alone() {
        let mut names = vec!["a", "b"];
        promote_primary(&mut names, |_| false);
        assert_eq!(names, ["a", "b"]);
    }
}
