//! sRGB hex colors to linear RGB.

/// Parse `#rrggbb` / `rrggbb` / `0xrrggbb` into a packed integer.
#[must_use]
pub fn parse_hex(s: &str) -> Option<u32> {
    let digits = s
        .trim()
        .trim_start_matches('#')
        .trim_start_matches("0x");
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Convert one sRGB-encoded channel in `[0, 1]` to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        (c * 0.947_867_3 + 0.052_132_7).powf(2.4)
    }
}

/// Convert a packed `0xrrggbb` sRGB color to linear RGB.
#[must_use]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(parse_hex("#fe2d2d"), Some(0x00fe_2d2d));
        assert_eq!(parse_hex("383830"), Some(0x0038_3830));
        assert_eq!(parse_hex("0xffffff"), Some(0x00ff_ffff));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
    }

    #[test]
    fn signs_are_not_digits() {
        assert_eq!(parse_hex("#+fffff"), None);
        assert_eq!(parse_hex("-fffff"), None);
        assert_eq!(parse_hex("0x+12345"), None);
    }

    #[test]
    fn white_and_black_are_fixed_points() {
        let white = hex_to_linear(0x00ff_ffff);
        for c in white {
            assert!((c - 1.0).abs() < 1e-5);
        }
        assert_eq!(hex_to_linear(0), [0.0; 3]);
    }

    #[test]
    fn mid_gray_darkens_in_linear() {
        let [r, g, b] = hex_to_linear(0x0080_8080);
        assert!((r - 0.2158).abs() < 1e-3);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
