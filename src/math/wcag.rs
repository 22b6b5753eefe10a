use super::{ColorError, ColorInput};

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// Returns a value in [0.0, 1.0]; hex inputs propagate their parse error.
pub fn relative_luminance(color: &ColorInput) -> Result<f64, ColorError> {
    let (r, g, b) = color.channels()?;
    Ok(0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b))
}

/// Calculate the WCAG contrast ratio between two colors, rounded to
/// 2 decimal places.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// Symmetric in its arguments; always in [1.0, 21.0]. Errors from either
/// luminance calculation propagate unchanged.
pub fn contrast_ratio(foreground: &ColorInput, background: &ColorInput) -> Result<f64, ColorError> {
    let lf = relative_luminance(foreground)?;
    let lb = relative_luminance(background)?;
    let (lighter, darker) = if lf > lb { (lf, lb) } else { (lb, lf) };
    let ratio = (lighter + 0.05) / (darker + 0.05);
    Ok((ratio * 100.0).round() / 100.0)
}
