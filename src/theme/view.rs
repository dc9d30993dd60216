//! Attachment point for the theme preference widget.

use super::mode::ColorMode;

/// Host-supplied surface the theme widget pushes its state to.
///
/// [`apply`](Self::apply) carries the theme itself; the other two methods
/// carry accessible state for the trigger control. The widget calls all
/// three together on every mutation, so the applied mode never diverges
/// from the widget's own value.
pub trait ThemeView {
    /// Applies the mode to the themed surface.
    fn apply(&mut self, mode: ColorMode);

    /// Marks the trigger control pressed (dark) or not (light).
    fn set_pressed(&mut self, pressed: bool);

    /// Replaces the trigger's accessible label. The label names the mode
    /// the next activation switches to.
    fn set_label(&mut self, label: &str);
}
