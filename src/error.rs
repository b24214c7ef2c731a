use thiserror::Error;

/// Errors from the DPI awareness operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DpiError {
    /// The running system has no API for the requested operation.
    #[error("no suitable DPI awareness API is available on this system")]
    Unsupported,
    /// The OS did not honor the requested awareness level.
    ///
    /// On the process-wide (Windows 8.1) API the first assignment wins for
    /// the lifetime of the process; later conflicting requests end up here.
    #[error("the system refused the requested DPI awareness level")]
    AwarenessRejected,
}

/// Errors from a display mode change, mapped from the `DISP_CHANGE_*`
/// status codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ModeChangeError {
    /// The mode was stored but only takes effect after a restart.
    #[error("the display mode was stored but a restart is required")]
    RestartRequired,
    #[error("the requested display mode is not supported by this device")]
    BadMode,
    #[error("the settings could not be written to the registry")]
    NotUpdated,
    #[error("an invalid set of flags was passed")]
    BadFlags,
    #[error("an invalid parameter was passed")]
    BadParam,
    #[error("the settings change was rejected because the system is DualView capable")]
    BadDualView,
    /// The display driver failed the mode, or an undocumented status came
    /// back.
    #[error("the display driver rejected the requested mode (status {0})")]
    Failed(i32),
}

impl ModeChangeError {
    /// Map a raw `DISP_CHANGE_*` status; zero is the success code.
    #[cfg_attr(not(target_os = "windows"), allow(dead_code))]
    pub(crate) fn check(status: i32) -> Result<(), ModeChangeError> {
        match status {
            0 => Ok(()),
            1 => Err(ModeChangeError::RestartRequired),
            -2 => Err(ModeChangeError::BadMode),
            -3 => Err(ModeChangeError::NotUpdated),
            -4 => Err(ModeChangeError::BadFlags),
            -5 => Err(ModeChangeError::BadParam),
            -6 => Err(ModeChangeError::BadDualView),
            other => Err(ModeChangeError::Failed(other)),
        }
    }
}

/// Errors from the fullscreen enter/restore pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The handle does not belong to a Win32 window.
    #[error("the window is not a Win32 window")]
    UnsupportedHandle,
    #[error(transparent)]
    ModeChange(#[from] ModeChangeError),
    /// The window placement could not be read or written.
    #[error("the window placement could not be updated")]
    Placement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_code_maps_to_ok() {
        assert_eq!(ModeChangeError::check(0), Ok(()));
    }

    #[test]
    fn documented_codes_map_to_variants() {
        assert_eq!(ModeChangeError::check(1), Err(ModeChangeError::RestartRequired));
        assert_eq!(ModeChangeError::check(-2), Err(ModeChangeError::BadMode));
        assert_eq!(ModeChangeError::check(-3), Err(ModeChangeError::NotUpdated));
        assert_eq!(ModeChangeError::check(-4), Err(ModeChangeError::BadFlags));
        assert_eq!(ModeChangeError::check(-5), Err(ModeChangeError::BadParam));
        assert_eq!(ModeChangeError::check(-6), Err(ModeChangeError::BadDualView));
    }

    #[test]
    fn driver_failure_keeps_the_raw_status() {
        assert_eq!(ModeChangeError::check(-1), Err(ModeChangeError::Failed(-1)));
        assert_eq!(ModeChangeError::check(-42), Err(ModeChangeError::Failed(-42)));
    }

    #[test]
    fn mode_change_errors_convert_into_fullscreen_errors() {
        let err: FullscreenError = ModeChangeError::BadMode.into();
        assert_eq!(err, FullscreenError::ModeChange(ModeChangeError::BadMode));
        assert_eq!(err.to_string(), ModeChangeError::BadMode.to_string());
    }
}
