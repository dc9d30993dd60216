//! Attachment point for the disclosure panel.

/// Host-supplied surface the panel pushes its state to.
///
/// Implementations update whatever the host uses to show or hide the
/// content block and to relabel the trigger control. Both methods are
/// called once during [`init`](super::DisclosurePanel::init) and once per
/// [`toggle`](super::DisclosurePanel::toggle).
pub trait PanelView {
    /// Shows or hides the content block.
    fn set_hidden(&mut self, hidden: bool);

    /// Replaces the text on the trigger control.
    fn set_trigger_label(&mut self, label: &str);
}
