//! Show/hide panel state machine.

use crate::error::SetupError;

use super::view::PanelView;

const DEFAULT_SHOW_LABEL: &str = "Click For Solution";
const DEFAULT_HIDE_LABEL: &str = "Hide Solution";

/// A block of content that a trigger control reveals and hides.
///
/// The panel starts hidden. Each [`toggle`](Self::toggle) flips visibility
/// and relabels the trigger: the show-label while hidden, the hide-label
/// while visible. Toggling is total and self-inverse; two toggles return
/// the panel to its prior state.
///
/// # Example
///
/// ```rust
/// use disclose::{DisclosurePanel, PanelView};
///
/// struct Section {
///     hidden: bool,
///     label: String,
/// }
///
/// impl PanelView for Section {
///     fn set_hidden(&mut self, hidden: bool) {
///         self.hidden = hidden;
///     }
///     fn set_trigger_label(&mut self, label: &str) {
///         self.label = label.to_string();
///     }
/// }
///
/// let mut panel = DisclosurePanel::builder()
///     .view(Section { hidden: true, label: String::new() })
///     .build()
///     .unwrap();
///
/// panel.init();
/// assert!(panel.is_hidden());
///
/// panel.toggle();
/// assert!(!panel.is_hidden());
/// ```
pub struct DisclosurePanel {
    hidden: bool,
    show_label: String,
    hide_label: String,
    view: Box<dyn PanelView>,
}

impl DisclosurePanel {
    /// Creates a new builder for constructing a panel.
    pub fn builder() -> DisclosurePanelBuilder {
        DisclosurePanelBuilder::new()
    }

    /// Applies the initial state (hidden, show-label) to the view.
    ///
    /// Call once after build, before wiring the trigger event.
    pub fn init(&mut self) {
        self.apply();
    }

    /// Flips visibility and relabels the trigger.
    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
        self.apply();
    }

    /// Returns whether the content block is currently hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn apply(&mut self) {
        self.view.set_hidden(self.hidden);
        let label = if self.hidden {
            &self.show_label
        } else {
            &self.hide_label
        };
        self.view.set_trigger_label(label);
    }
}

/// Builder for [`DisclosurePanel`].
///
/// A view binding is required; labels default to the solution-panel pair
/// ("Click For Solution" / "Hide Solution").
pub struct DisclosurePanelBuilder {
    show_label: String,
    hide_label: String,
    view: Option<Box<dyn PanelView>>,
}

impl DisclosurePanelBuilder {
    fn new() -> Self {
        Self {
            show_label: DEFAULT_SHOW_LABEL.to_string(),
            hide_label: DEFAULT_HIDE_LABEL.to_string(),
            view: None,
        }
    }

    /// Binds the host surface the panel renders into.
    pub fn view<V: PanelView + 'static>(mut self, view: V) -> Self {
        self.view = Some(Box::new(view));
        self
    }

    /// Overrides the trigger labels for the hidden and visible states.
    pub fn labels(mut self, show: &str, hide: &str) -> Self {
        self.show_label = show.to_string();
        self.hide_label = hide.to_string();
        self
    }

    /// Builds the panel, hidden.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingBinding`] if no view was bound.
    pub fn build(self) -> Result<DisclosurePanel, SetupError> {
        let view = self.view.ok_or(SetupError::MissingBinding {
            component: "disclosure panel",
            binding: "view",
        })?;
        Ok(DisclosurePanel {
            hidden: true,
            show_label: self.show_label,
            hide_label: self.hide_label,
            view,
        })
    }
}

impl Default for DisclosurePanelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
