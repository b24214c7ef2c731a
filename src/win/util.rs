use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use raw_window_handle::{HasRawWindowHandle, RawWindowHandle};
use windows_sys::Win32::Foundation::HWND;

pub fn to_wstr(str: &str) -> Vec<u16> {
    let mut wstr: Vec<u16> = OsStr::new(str).encode_wide().collect();
    wstr.push(0);
    wstr
}

/// Decode a NUL-terminated UTF-16 buffer from a Win32 struct field.
pub fn from_wstr(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// The Win32 handle behind a window, when there is one.
pub fn hwnd_from(window: &impl HasRawWindowHandle) -> Option<HWND> {
    match window.raw_window_handle() {
        RawWindowHandle::Win32(handle) => Some(handle.hwnd as HWND),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_strings_round_trip() {
        let wide = to_wstr("\\\\.\\DISPLAY1");
        assert_eq!(wide.last(), Some(&0));
        assert_eq!(from_wstr(&wide), "\\\\.\\DISPLAY1");
    }

    #[test]
    fn decoding_stops_at_the_terminator() {
        let buffer = [b'a' as u16, b'b' as u16, 0, b'x' as u16];
        assert_eq!(from_wstr(&buffer), "ab");
    }

    #[test]
    fn unterminated_buffers_decode_fully() {
        let buffer = [b'a' as u16, b'b' as u16];
        assert_eq!(from_wstr(&buffer), "ab");
    }
}
