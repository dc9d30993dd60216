//! Disclosure panel and theme preference widgets.
//!
//! This crate provides two independent, single-threaded UI widgets that own
//! their state and push side effects through injected collaborators:
//!
//! - [`DisclosurePanel`]: shows/hides a block of content and keeps its
//!   trigger label in sync with visibility
//! - [`ThemePreference`]: toggles between light and dark, seeding from a
//!   persisted choice or the OS color scheme, and persisting explicit user
//!   choices
//!
//! Both widgets bind to a view trait ([`PanelView`], [`ThemeView`]) supplied
//! by the host at build time; the host wires its real input events to the
//! widget's methods. Neither widget requires `Send` — all mutation happens
//! inside the host's event dispatch, one handler at a time.
//!
//! # Example
//!
//! ```rust
//! use disclose::{ColorMode, MemoryStore, ThemePreference, ThemeView};
//!
//! struct Header {
//!     mode: ColorMode,
//! }
//!
//! impl ThemeView for Header {
//!     fn apply(&mut self, mode: ColorMode) {
//!         self.mode = mode;
//!     }
//!     fn set_pressed(&mut self, _pressed: bool) {}
//!     fn set_label(&mut self, _label: &str) {}
//! }
//!
//! let mut pref = ThemePreference::builder()
//!     .view(Header { mode: ColorMode::Light })
//!     .store(MemoryStore::new())
//!     .build()
//!     .unwrap();
//!
//! pref.init();
//! pref.toggle();
//! ```

mod error;
mod panel;
mod term;
mod theme;

pub use error::SetupError;
pub use panel::{DisclosurePanel, DisclosurePanelBuilder, PanelView};
pub use term::{TermPanelView, TermThemeView};
pub use theme::{
    set_theme_detector, ColorMode, JsonFileStore, MemoryStore, OsThemeSource, PreferenceStore,
    SystemThemeSource, ThemePreference, ThemePreferenceBuilder, ThemeView,
};
