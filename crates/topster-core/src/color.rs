// File: crates/topster-core/src/color.rs
// Summary: RGBA color value, strict hex text colors and CSS background colors.

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Strict `#RRGGBB` (case-insensitive). Anything else is `None`.
    pub fn from_hex6(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse any CSS color string: hex forms, named colors, `rgb()`,
    /// `hsl()` and friends. `None` when the string is not a color.
    pub fn parse(s: &str) -> Option<Self> {
        let [r, g, b, a] = csscolorparser::parse(s.trim()).ok()?.to_rgba8();
        Some(Self::rgba(r, g, b, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex6_is_strict() {
        assert_eq!(Color::from_hex6("#1a2B3c"), Some(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(Color::from_hex6("blue"), None);
        assert_eq!(Color::from_hex6("#fff"), None);
        assert_eq!(Color::from_hex6("#12345g"), None);
        assert_eq!(Color::from_hex6("123456"), None);
    }

    #[test]
    fn parse_css_forms() {
        assert_eq!(Color::parse("#000"), Some(Color::BLACK));
        assert_eq!(Color::parse("#abc"), Some(Color::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(Color::parse(" #FF000080 "), Some(Color::rgba(255, 0, 0, 128)));
        assert_eq!(Color::parse("White"), Some(Color::WHITE));
        assert_eq!(Color::parse("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(Color::parse("rebeccapurple"), Some(Color::rgb(102, 51, 153)));
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("not-a-color"), None);
    }
}
