//! Disclosure panel widget.
//!
//! This module provides:
//!
//! - [`DisclosurePanel`]: show/hide state machine with a label that tracks
//!   visibility
//! - [`PanelView`]: the attachment point the host binds the panel to
//!
//! The panel owns one boolean (hidden or not) and nothing else. It is
//! created hidden, flipped only by [`DisclosurePanel::toggle`], and never
//! persisted.

mod view;

#[allow(clippy::module_inception)]
mod panel;

pub use panel::{DisclosurePanel, DisclosurePanelBuilder};
pub use view::PanelView;
