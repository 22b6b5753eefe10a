use crate::types::DisplayState;

/// Actions dispatched from the widget's property menu. The host reports a
/// clicked menu item by property name; each maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAction {
    ToggleDarkMode,
    ToggleLabels,
    ToggleLayout,
}

impl PropertyAction {
    /// Map the host's propertyName to an action. Unknown names yield None
    /// so the boundary can reject them without panicking.
    pub fn from_property(name: &str) -> Option<Self> {
        match name {
            "darkMode" => Some(Self::ToggleDarkMode),
            "showLabels" => Some(Self::ToggleLabels),
            "horizontalLayout" => Some(Self::ToggleLayout),
            _ => None,
        }
    }

    /// Apply the action as a pure state transition. Toggles never touch the
    /// colors, so the ratio mirror stays valid without a recompute.
    pub fn apply(self, state: &mut DisplayState) {
        match self {
            Self::ToggleDarkMode => state.dark_mode = !state.dark_mode,
            Self::ToggleLabels => state.show_labels = !state.show_labels,
            Self::ToggleLayout => state.horizontal_layout = !state.horizontal_layout,
        }
    }
}
