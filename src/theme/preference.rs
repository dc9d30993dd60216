//! Theme preference state machine.

use crate::error::SetupError;

use super::mode::ColorMode;
use super::store::{MemoryStore, PreferenceStore};
use super::system::{OsThemeSource, SystemThemeSource};
use super::view::ThemeView;

const DEFAULT_STORE_KEY: &str = "theme";

/// Light/dark theme controller with persistence and system tracking.
///
/// The initial mode resolves as stored choice, then system preference,
/// then light. [`toggle`](Self::toggle) flips the mode and persists it as
/// an explicit choice; once a choice is explicit, system preference
/// changes reported via [`system_changed`](Self::system_changed) are
/// ignored for the life of the instance. A stored value from an earlier
/// session counts as explicit from the start.
///
/// Every mutation pushes the new mode and the trigger's accessible state
/// (pressed means dark; the label names the next mode) to the bound
/// [`ThemeView`], so the applied theme never diverges from
/// [`mode`](Self::mode).
///
/// # Example
///
/// ```rust
/// use disclose::{ColorMode, MemoryStore, PreferenceStore, ThemePreference, ThemeView};
///
/// struct Page {
///     mode: ColorMode,
/// }
///
/// impl ThemeView for Page {
///     fn apply(&mut self, mode: ColorMode) {
///         self.mode = mode;
///     }
///     fn set_pressed(&mut self, _pressed: bool) {}
///     fn set_label(&mut self, _label: &str) {}
/// }
///
/// let mut store = MemoryStore::new();
/// store.set("theme", "dark");
///
/// let mut pref = ThemePreference::builder()
///     .view(Page { mode: ColorMode::Light })
///     .store(store)
///     .build()
///     .unwrap();
///
/// pref.init();
/// assert_eq!(pref.mode(), ColorMode::Dark);
/// ```
pub struct ThemePreference {
    mode: ColorMode,
    explicit: bool,
    key: String,
    view: Box<dyn ThemeView>,
    store: Box<dyn PreferenceStore>,
    system: Box<dyn SystemThemeSource>,
}

impl ThemePreference {
    /// Creates a new builder for constructing a theme preference.
    pub fn builder() -> ThemePreferenceBuilder {
        ThemePreferenceBuilder::new()
    }

    /// Resolves the initial mode and applies it to the view.
    ///
    /// A stored value that does not parse as a mode counts as absent.
    /// Call once after build, before wiring the trigger and system events.
    pub fn init(&mut self) {
        let stored = self
            .store
            .get(&self.key)
            .and_then(|v| v.parse::<ColorMode>().ok());

        self.explicit = stored.is_some();
        self.mode = stored
            .or_else(|| self.system.current())
            .unwrap_or_default();
        self.apply();
    }

    /// Flips the mode, persists it as the explicit choice, and applies it.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        self.explicit = true;
        self.store.set(&self.key, self.mode.as_str());
        self.apply();
    }

    /// Handles a system color-scheme change notification.
    ///
    /// Adopted only while no explicit choice exists; an explicit choice
    /// always wins, so later notifications are ignored. System changes are
    /// never persisted.
    pub fn system_changed(&mut self, mode: ColorMode) {
        if self.explicit {
            return;
        }
        self.mode = mode;
        self.apply();
    }

    /// Returns the current mode.
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Returns whether the user has made an explicit choice.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    fn apply(&mut self) {
        self.view.apply(self.mode);
        self.view.set_pressed(self.mode == ColorMode::Dark);
        let label = match self.mode {
            ColorMode::Light => "Switch to dark theme",
            ColorMode::Dark => "Switch to light theme",
        };
        self.view.set_label(label);
    }
}

/// Builder for [`ThemePreference`].
///
/// A view binding is required. The store defaults to a session-only
/// [`MemoryStore`], the system source to OS detection, and the store key
/// to `"theme"`.
pub struct ThemePreferenceBuilder {
    key: String,
    view: Option<Box<dyn ThemeView>>,
    store: Option<Box<dyn PreferenceStore>>,
    system: Option<Box<dyn SystemThemeSource>>,
}

impl ThemePreferenceBuilder {
    fn new() -> Self {
        Self {
            key: DEFAULT_STORE_KEY.to_string(),
            view: None,
            store: None,
            system: None,
        }
    }

    /// Binds the host surface the theme is applied to.
    pub fn view<V: ThemeView + 'static>(mut self, view: V) -> Self {
        self.view = Some(Box::new(view));
        self
    }

    /// Overrides the persistence collaborator.
    pub fn store<S: PreferenceStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Overrides the system preference collaborator.
    pub fn system<S: SystemThemeSource + 'static>(mut self, system: S) -> Self {
        self.system = Some(Box::new(system));
        self
    }

    /// Overrides the key the choice is stored under.
    pub fn key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Builds the widget. Call [`ThemePreference::init`] to resolve and
    /// apply the initial mode.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingBinding`] if no view was bound.
    pub fn build(self) -> Result<ThemePreference, SetupError> {
        let view = self.view.ok_or(SetupError::MissingBinding {
            component: "theme preference",
            binding: "view",
        })?;
        Ok(ThemePreference {
            mode: ColorMode::default(),
            explicit: false,
            key: self.key,
            view,
            store: self.store.unwrap_or_else(|| Box::new(MemoryStore::new())),
            system: self.system.unwrap_or_else(|| Box::new(OsThemeSource::new())),
        })
    }
}

impl Default for ThemePreferenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorded {
        mode: Option<ColorMode>,
        pressed: Option<bool>,
        label: String,
    }

    #[derive(Clone, Default)]
    struct FakeView {
        state: Rc<RefCell<Recorded>>,
    }

    impl ThemeView for FakeView {
        fn apply(&mut self, mode: ColorMode) {
            self.state.borrow_mut().mode = Some(mode);
        }
        fn set_pressed(&mut self, pressed: bool) {
            self.state.borrow_mut().pressed = Some(pressed);
        }
        fn set_label(&mut self, label: &str) {
            self.state.borrow_mut().label = label.to_string();
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore {
        values: Rc<RefCell<std::collections::BTreeMap<String, String>>>,
    }

    impl PreferenceStore for SharedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
        fn set(&mut self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    struct FixedSystem(Option<ColorMode>);

    impl SystemThemeSource for FixedSystem {
        fn current(&self) -> Option<ColorMode> {
            self.0
        }
    }

    fn build(
        view: FakeView,
        store: SharedStore,
        system: Option<ColorMode>,
    ) -> ThemePreference {
        ThemePreference::builder()
            .view(view)
            .store(store)
            .system(FixedSystem(system))
            .build()
            .unwrap()
    }

    #[test]
    fn test_init_uses_system_when_nothing_stored() {
        let view = FakeView::default();
        let mut pref = build(view, SharedStore::default(), Some(ColorMode::Dark));
        pref.init();

        assert_eq!(pref.mode(), ColorMode::Dark);
        assert!(!pref.is_explicit());
    }

    #[test]
    fn test_init_defaults_to_light_without_stored_or_system() {
        let view = FakeView::default();
        let mut pref = build(view, SharedStore::default(), None);
        pref.init();

        assert_eq!(pref.mode(), ColorMode::Light);
    }

    #[test]
    fn test_stored_choice_beats_system() {
        let view = FakeView::default();
        let mut store = SharedStore::default();
        store.set("theme", "light");

        let mut pref = build(view, store, Some(ColorMode::Dark));
        pref.init();

        assert_eq!(pref.mode(), ColorMode::Light);
        assert!(pref.is_explicit());
    }

    #[test]
    fn test_malformed_stored_value_counts_as_absent() {
        let view = FakeView::default();
        let mut store = SharedStore::default();
        store.set("theme", "blurple");

        let mut pref = build(view, store, Some(ColorMode::Dark));
        pref.init();

        assert_eq!(pref.mode(), ColorMode::Dark);
        assert!(!pref.is_explicit());
    }

    #[test]
    fn test_init_does_not_persist() {
        let view = FakeView::default();
        let store = SharedStore::default();
        let values = store.values.clone();

        let mut pref = build(view, store, Some(ColorMode::Dark));
        pref.init();

        assert!(values.borrow().is_empty());
    }

    #[test]
    fn test_toggle_applies_and_persists() {
        let view = FakeView::default();
        let state = view.state.clone();
        let store = SharedStore::default();
        let values = store.values.clone();

        let mut pref = build(view, store, Some(ColorMode::Light));
        pref.init();
        pref.toggle();

        assert_eq!(pref.mode(), ColorMode::Dark);
        assert_eq!(state.borrow().mode, Some(ColorMode::Dark));
        assert_eq!(values.borrow().get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_toggle_updates_accessible_state() {
        let view = FakeView::default();
        let state = view.state.clone();
        let mut pref = build(view, SharedStore::default(), Some(ColorMode::Light));
        pref.init();

        assert_eq!(state.borrow().pressed, Some(false));
        assert_eq!(state.borrow().label, "Switch to dark theme");

        pref.toggle();
        assert_eq!(state.borrow().pressed, Some(true));
        assert_eq!(state.borrow().label, "Switch to light theme");
    }

    #[test]
    fn test_system_change_adopted_before_explicit_choice() {
        let view = FakeView::default();
        let state = view.state.clone();
        let mut pref = build(view, SharedStore::default(), Some(ColorMode::Light));
        pref.init();

        pref.system_changed(ColorMode::Dark);
        assert_eq!(pref.mode(), ColorMode::Dark);
        assert_eq!(state.borrow().mode, Some(ColorMode::Dark));
    }

    #[test]
    fn test_system_change_never_persists() {
        let view = FakeView::default();
        let store = SharedStore::default();
        let values = store.values.clone();

        let mut pref = build(view, store, Some(ColorMode::Light));
        pref.init();
        pref.system_changed(ColorMode::Dark);

        assert!(values.borrow().is_empty());
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let view = FakeView::default();
        let mut pref = build(view, SharedStore::default(), Some(ColorMode::Light));
        pref.init();
        pref.toggle();

        pref.system_changed(ColorMode::Light);
        assert_eq!(pref.mode(), ColorMode::Dark);
    }

    #[test]
    fn test_stored_choice_ignores_system_changes() {
        // A choice persisted in an earlier session is still explicit.
        let view = FakeView::default();
        let mut store = SharedStore::default();
        store.set("theme", "light");

        let mut pref = build(view, store, Some(ColorMode::Dark));
        pref.init();
        pref.system_changed(ColorMode::Dark);

        assert_eq!(pref.mode(), ColorMode::Light);
    }

    #[test]
    fn test_custom_store_key() {
        let view = FakeView::default();
        let store = SharedStore::default();
        let values = store.values.clone();

        let mut pref = ThemePreference::builder()
            .view(view)
            .store(store)
            .system(FixedSystem(Some(ColorMode::Light)))
            .key("ui.color-mode")
            .build()
            .unwrap();
        pref.init();
        pref.toggle();

        assert_eq!(
            values.borrow().get("ui.color-mode").map(String::as_str),
            Some("dark")
        );
    }

    #[test]
    fn test_build_without_view_fails() {
        let result = ThemePreference::builder().build();
        assert_eq!(
            result.err(),
            Some(SetupError::MissingBinding {
                component: "theme preference",
                binding: "view",
            })
        );
    }
}
