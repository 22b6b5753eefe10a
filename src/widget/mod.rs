pub mod menu;
pub mod store;

use crate::math::{hex, wcag, ColorError, ColorInput};
use crate::types::DisplayState;

/// Which swatch a committed text entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Foreground,
    Background,
}

impl ColorField {
    /// Map the host's field name to a swatch.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "foreground" => Some(Self::Foreground),
            "background" => Some(Self::Background),
            _ => None,
        }
    }
}

/// Recompute the ratio mirror from the currently committed colors.
pub fn recompute_ratio(state: &DisplayState) -> Result<f64, ColorError> {
    wcag::contrast_ratio(
        &ColorInput::Hex(state.foreground.clone()),
        &ColorInput::Hex(state.background.clone()),
    )
}

/// Validate and commit a user-entered hex value, then refresh the ratio.
///
/// Runs the full parse (not just the loose validator) up front, so inputs
/// like "zzzzzz" are rejected here and the previously committed color and
/// ratio stay untouched. The host catches the error and shows its own
/// rejection notice.
pub fn commit_color(
    state: &mut DisplayState,
    field: ColorField,
    value: &str,
) -> Result<(), ColorError> {
    hex::hex_to_rgb(value)?;
    match field {
        ColorField::Foreground => state.foreground = value.to_string(),
        ColorField::Background => state.background = value.to_string(),
    }
    state.ratio = recompute_ratio(state)?;
    Ok(())
}
