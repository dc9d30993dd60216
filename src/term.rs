//! Terminal bindings for the panel and theme views.
//!
//! These implement the view traits on top of [`console::Style`], for hosts
//! that render the widgets as plain terminal text. They are deliberately
//! small: each one holds the pushed state and knows how to print it.

use console::Style;

use crate::panel::PanelView;
use crate::theme::{ColorMode, ThemeView};

/// Panel surface that renders as trigger line plus optional body.
///
/// While hidden only the trigger label is printed; once revealed the body
/// follows, rendered with the body style.
///
/// # Example
///
/// ```rust
/// use disclose::{DisclosurePanel, TermPanelView};
///
/// let view = TermPanelView::new("let avg = (a + b) / 2.0;");
/// let mut panel = DisclosurePanel::builder().view(view).build().unwrap();
/// panel.init();
/// panel.toggle();
/// ```
#[derive(Debug)]
pub struct TermPanelView {
    body: String,
    trigger_style: Style,
    body_style: Style,
    hidden: bool,
    label: String,
}

impl TermPanelView {
    /// Creates a view over the given body text with default styling
    /// (bold trigger, dim body).
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            trigger_style: Style::new().bold(),
            body_style: Style::new().dim(),
            hidden: true,
            label: String::new(),
        }
    }

    /// Overrides the trigger and body styles.
    pub fn with_styles(mut self, trigger: Style, body: Style) -> Self {
        self.trigger_style = trigger;
        self.body_style = body;
        self
    }

    /// Renders the current state as terminal text.
    pub fn render(&self) -> String {
        let trigger = self.trigger_style.apply_to(&self.label).to_string();
        if self.hidden {
            trigger
        } else {
            format!("{}\n{}", trigger, self.body_style.apply_to(&self.body))
        }
    }
}

impl PanelView for TermPanelView {
    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_trigger_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

/// Theme surface that styles text with a light/dark style pair.
///
/// Holds one style per mode and answers with whichever matches the mode
/// last applied to it. The toggle line carries the pressed marker and
/// accessible label pushed by the widget.
///
/// # Example
///
/// ```rust
/// use console::Style;
/// use disclose::{MemoryStore, TermThemeView, ThemePreference};
///
/// let view = TermThemeView::new(
///     Style::new().black().on_white(),
///     Style::new().white().on_black(),
/// );
/// let mut pref = ThemePreference::builder()
///     .view(view)
///     .store(MemoryStore::new())
///     .build()
///     .unwrap();
/// pref.init();
/// ```
#[derive(Debug)]
pub struct TermThemeView {
    light: Style,
    dark: Style,
    mode: ColorMode,
    pressed: bool,
    label: String,
}

impl TermThemeView {
    /// Creates a view with separate light and dark styles.
    pub fn new(light: Style, dark: Style) -> Self {
        Self {
            light,
            dark,
            mode: ColorMode::Light,
            pressed: false,
            label: String::new(),
        }
    }

    /// Returns the mode last applied to this view.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Styles `text` with the active mode's style.
    pub fn styled(&self, text: &str) -> String {
        let style = match self.mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        };
        style.apply_to(text).to_string()
    }

    /// Renders the toggle control as terminal text.
    pub fn render_toggle(&self) -> String {
        let marker = if self.pressed { "[x]" } else { "[ ]" };
        format!("{} {}", marker, self.label)
    }
}

impl ThemeView for TermThemeView {
    fn apply(&mut self, mode: ColorMode) {
        self.mode = mode;
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}
