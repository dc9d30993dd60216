//! Widget setup errors.

/// Error returned when a widget is built without a required binding.
///
/// Bindings are supplied by the surrounding host page or screen; a missing
/// one is a configuration mistake, reported once at build time. All
/// operations after a successful build are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A required attachment point was never bound
    MissingBinding {
        component: &'static str,
        binding: &'static str,
    },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingBinding { component, binding } => {
                write!(f, "{} built without a {} binding", component, binding)
            }
        }
    }
}

impl std::error::Error for SetupError {}
