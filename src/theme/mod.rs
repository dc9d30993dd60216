//! Theme preference widget and its collaborators.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: light/dark toggle with persistence and
//!   system-preference tracking
//! - [`ColorMode`]: the two-valued theme domain
//! - [`PreferenceStore`]: key-value persistence collaborator, with
//!   [`MemoryStore`] and [`JsonFileStore`] implementations
//! - [`SystemThemeSource`]: OS color-scheme collaborator, with
//!   [`OsThemeSource`] backed by OS detection
//! - [`ThemeView`]: the attachment point the host binds the widget to
//!
//! Resolution order at startup is stored choice, then system preference,
//! then light. An explicit user toggle is persisted and, from that point
//! on, system preference changes are ignored.

mod mode;
mod preference;
mod store;
mod system;
mod view;

pub use mode::ColorMode;
pub use preference::{ThemePreference, ThemePreferenceBuilder};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
pub use system::{set_theme_detector, OsThemeSource, SystemThemeSource};
pub use view::ThemeView;
