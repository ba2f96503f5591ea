//! Color types for rich text.
//!
//! Supports the sixteen named text colors and 24-bit RGB values written as
//! hexadecimal tag attributes.

use crate::error::ColorParseError;

/// One of the sixteen named text colors, selected by formatting codes `0`-`f`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// Lower-case name as used in chat components, e.g. `dark_blue`.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The RGB value this color is displayed with.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xAA),
            NamedColor::DarkGreen => (0x00, 0xAA, 0x00),
            NamedColor::DarkAqua => (0x00, 0xAA, 0xAA),
            NamedColor::DarkRed => (0xAA, 0x00, 0x00),
            NamedColor::DarkPurple => (0xAA, 0x00, 0xAA),
            NamedColor::Gold => (0xFF, 0xAA, 0x00),
            NamedColor::Gray => (0xAA, 0xAA, 0xAA),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xFF),
            NamedColor::Green => (0x55, 0xFF, 0x55),
            NamedColor::Aqua => (0x55, 0xFF, 0xFF),
            NamedColor::Red => (0xFF, 0x55, 0x55),
            NamedColor::LightPurple => (0xFF, 0x55, 0xFF),
            NamedColor::Yellow => (0xFF, 0xFF, 0x55),
            NamedColor::White => (0xFF, 0xFF, 0xFF),
        }
    }
}

/// A text color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Named color from a formatting code.
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_packed(value: u32) -> Result<Self, ColorParseError> {
        if value > 0xFF_FFFF {
            return Err(ColorParseError::OutOfRange(value));
        }
        let [_, r, g, b] = value.to_be_bytes();
        Ok(Color::Rgb(r, g, b))
    }

    /// Parse the attribute of a `color` tag.
    ///
    /// The attribute is a hexadecimal number, optionally preceded by one
    /// marker character that is not a hex digit (`#ff0000`, `&ff0000`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::Color;
    ///
    /// assert_eq!(Color::parse_attribute("ff0000").unwrap(), Color::Rgb(255, 0, 0));
    /// assert_eq!(Color::parse_attribute("#00ff00").unwrap(), Color::Rgb(0, 255, 0));
    /// assert!(Color::parse_attribute("rgb").is_err());
    /// ```
    pub fn parse_attribute(input: &str) -> Result<Self, ColorParseError> {
        if let Ok(value) = u32::from_str_radix(input, 16) {
            return Self::from_packed(value);
        }

        let mut chars = input.chars();
        match chars.next() {
            Some(marker) if !marker.is_ascii_hexdigit() => {
                let value = u32::from_str_radix(chars.as_str(), 16)
                    .map_err(|_| ColorParseError::InvalidHex(input.to_string()))?;
                Self::from_packed(value)
            }
            _ => Err(ColorParseError::InvalidHex(input.to_string())),
        }
    }

    /// Convert to RGB components.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    /// Convert to a packed `0xRRGGBB` value.
    pub fn to_packed(self) -> u32 {
        let (r, g, b) = self.to_rgb();
        u32::from_be_bytes([0, r, g, b])
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_hex() {
        assert_eq!(
            Color::parse_attribute("ff5733").unwrap(),
            Color::Rgb(255, 87, 51)
        );
        assert_eq!(Color::parse_attribute("0").unwrap(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn parse_with_marker() {
        assert_eq!(
            Color::parse_attribute("#ff5733").unwrap(),
            Color::Rgb(255, 87, 51)
        );
    }

    #[test]
    fn parse_invalid() {
        assert!(Color::parse_attribute("").is_err());
        assert!(Color::parse_attribute("#").is_err());
        assert!(Color::parse_attribute("#gg0000").is_err());
        assert!(Color::parse_attribute("a#ff0000").is_err());
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            Color::parse_attribute("1000000"),
            Err(ColorParseError::OutOfRange(0x100_0000))
        );
    }

    #[test]
    fn to_rgb() {
        assert_eq!(Color::Named(NamedColor::Red).to_rgb(), (255, 85, 85));
        assert_eq!(Color::Rgb(10, 20, 30).to_rgb(), (10, 20, 30));
        assert_eq!(Color::Rgb(0x12, 0x34, 0x56).to_packed(), 0x123456);
    }
}
