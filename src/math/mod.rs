pub mod hex;
pub mod wcag;

use thiserror::Error;

/// Failures the color math can surface. Both are raised synchronously at
/// the point of failure; there is no fallback color and no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex string failed validation, or a 2-character pair inside an
    /// otherwise "valid" 6-character string is not base-16.
    #[error("invalid HEX value: {0:?}")]
    InvalidColorFormat(String),
    /// A value that should be a color is neither a hex string nor a
    /// 3-element RGB triple with channels in 0-255.
    #[error("invalid color input: {0}")]
    InvalidInputType(String),
}

/// A color as the widget host supplies it: either a hex string
/// ("#1e293b", leading `#` optional, case-insensitive) or an RGB triple.
/// Exactly one representation is active per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    Hex(String),
    Rgb(u8, u8, u8),
}

impl ColorInput {
    /// Build an RGB input from a raw channel list as it arrives over the
    /// host boundary. Anything other than exactly 3 channels in 0-255 is
    /// rejected as `InvalidInputType`.
    pub fn from_channels(channels: &[u32]) -> Result<Self, ColorError> {
        match channels {
            &[r, g, b] => {
                let channel = |c: u32| {
                    u8::try_from(c).map_err(|_| {
                        ColorError::InvalidInputType(format!("channel {c} is outside 0-255"))
                    })
                };
                Ok(Self::Rgb(channel(r)?, channel(g)?, channel(b)?))
            }
            other => Err(ColorError::InvalidInputType(format!(
                "expected 3 RGB channels, got {}",
                other.len()
            ))),
        }
    }

    /// Decode to 8-bit channels. Hex strings go through `hex::hex_to_rgb`
    /// and can fail; triples are returned as-is.
    pub fn channels(&self) -> Result<(u8, u8, u8), ColorError> {
        match self {
            Self::Hex(value) => hex::hex_to_rgb(value),
            Self::Rgb(r, g, b) => Ok((*r, *g, *b)),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Hex(value.to_string())
    }
}

impl From<(u8, u8, u8)> for ColorInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_from_channels() {
        assert_eq!(
            ColorInput::from_channels(&[255, 0, 128]),
            Ok(ColorInput::Rgb(255, 0, 128))
        );
    }

    #[test]
    fn wrong_arity_rejected() {
        assert!(matches!(
            ColorInput::from_channels(&[255, 0]),
            Err(ColorError::InvalidInputType(_))
        ));
        assert!(matches!(
            ColorInput::from_channels(&[1, 2, 3, 4]),
            Err(ColorError::InvalidInputType(_))
        ));
        assert!(matches!(
            ColorInput::from_channels(&[]),
            Err(ColorError::InvalidInputType(_))
        ));
    }

    #[test]
    fn out_of_range_channel_rejected() {
        assert!(matches!(
            ColorInput::from_channels(&[256, 0, 0]),
            Err(ColorError::InvalidInputType(_))
        ));
    }

    #[test]
    fn hex_input_decodes_through_parser() {
        let input = ColorInput::from("#ff0080");
        assert_eq!(input.channels(), Ok((255, 0, 128)));
    }

    #[test]
    fn rgb_input_decodes_directly() {
        let input = ColorInput::from((30, 41, 59));
        assert_eq!(input.channels(), Ok((30, 41, 59)));
    }

    #[test]
    fn bad_hex_surfaces_format_error() {
        let input = ColorInput::from("zzzzzz");
        assert!(matches!(
            input.channels(),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }
}
