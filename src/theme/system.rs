//! OS color-scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::mode::ColorMode;

/// Source of the host system's light/dark preference.
///
/// Returns `None` when the host has no detectable preference, which lets
/// the widget fall through to its light default.
pub trait SystemThemeSource {
    /// Reads the current system preference.
    fn current(&self) -> Option<ColorMode>;
}

/// System source backed by OS detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsThemeSource;

impl OsThemeSource {
    pub fn new() -> Self {
        Self
    }
}

impl SystemThemeSource for OsThemeSource {
    fn current(&self) -> Option<ColorMode> {
        Some(detect_color_mode())
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector [`OsThemeSource`] reads the OS preference from.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
