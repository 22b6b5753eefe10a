#[macro_use]
extern crate napi_derive;

pub mod math;
pub mod types;
pub mod widget;

use napi::bindgen_prelude::Either;
use napi::{Error, Result, Status};

use math::{ColorError, ColorInput};
use types::{DisplayState, RgbChannels};
use widget::ColorField;

fn invalid_arg(err: ColorError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// Convert the host-side `string | number[]` union into a ColorInput.
fn color_input(value: Either<String, Vec<u32>>) -> std::result::Result<ColorInput, ColorError> {
    match value {
        Either::A(hex) => Ok(ColorInput::Hex(hex)),
        Either::B(channels) => ColorInput::from_channels(&channels),
    }
}

#[napi]
pub fn health_check() -> String {
    "contrast-widget-native ok".to_string()
}

/// Loose 6-character hex validation, as the widget's text inputs use it.
#[napi]
pub fn is_valid_hex(input: String) -> bool {
    math::hex::is_valid_hex(&input)
}

/// Strict hex parse to 8-bit channels. Throws InvalidArg on anything that
/// is not 6 base-16 pairs.
#[napi]
pub fn hex_to_rgb(input: String) -> Result<RgbChannels> {
    let (r, g, b) = math::hex::hex_to_rgb(&input).map_err(invalid_arg)?;
    Ok(RgbChannels {
        r: u32::from(r),
        g: u32::from(g),
        b: u32::from(b),
    })
}

/// Relative luminance in [0, 1] of a hex string or RGB triple.
#[napi]
pub fn relative_luminance(color: Either<String, Vec<u32>>) -> Result<f64> {
    let color = color_input(color).map_err(invalid_arg)?;
    math::wcag::relative_luminance(&color).map_err(invalid_arg)
}

/// WCAG contrast ratio between two colors, rounded to 2 decimals.
/// This is the one call the widget host re-invokes whenever either color
/// changes.
#[napi]
pub fn contrast_ratio(
    foreground: Either<String, Vec<u32>>,
    background: Either<String, Vec<u32>>,
) -> Result<f64> {
    let fg = color_input(foreground).map_err(invalid_arg)?;
    let bg = color_input(background).map_err(invalid_arg)?;
    math::wcag::contrast_ratio(&fg, &bg).map_err(invalid_arg)
}

/// Commit a user-entered hex value to one swatch and refresh the ratio.
/// On rejection the host receives an InvalidArg error and the state it
/// passed in stays the committed one.
#[napi]
pub fn commit_color(state: DisplayState, field: String, value: String) -> Result<DisplayState> {
    let field = ColorField::from_name(&field)
        .ok_or_else(|| Error::new(Status::InvalidArg, format!("unknown color field: {field:?}")))?;
    let mut next = state;
    widget::commit_color(&mut next, field, &value).map_err(invalid_arg)?;
    Ok(next)
}

/// Dispatch a property-menu click by property name.
#[napi]
pub fn apply_property_action(state: DisplayState, property: String) -> Result<DisplayState> {
    let action = widget::menu::PropertyAction::from_property(&property).ok_or_else(|| {
        Error::new(
            Status::InvalidArg,
            format!("unknown property action: {property:?}"),
        )
    })?;
    let mut next = state;
    action.apply(&mut next);
    Ok(next)
}
