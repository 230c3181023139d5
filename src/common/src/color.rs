//! Text-mode colors and packed attribute bytes.

use crate::error::ConsoleError;

/// Text-mode color codes.
///
/// Standard 16-color palette, in hardware order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light gray color.
    LightGray = 7,
    /// Dark gray color.
    DarkGray = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Light magenta color.
    LightMagenta = 13,
    /// Yellow color.
    Yellow = 14,
    /// White color.
    White = 15,
}

impl Color {
    /// All colors in palette order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGray,
        Color::DarkGray,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::Yellow,
        Color::White,
    ];

    /// Name printed by the shell's `colors` command.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Brown => "brown",
            Color::LightGray => "grey",
            Color::DarkGray => "dark grey",
            Color::LightBlue => "lt blue",
            Color::LightGreen => "lt green",
            Color::LightCyan => "lt cyan",
            Color::LightRed => "lt red",
            Color::LightMagenta => "lt magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = ConsoleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ConsoleError::InvalidColor(value))
    }
}

/// Combined foreground and background color, as stored in every cell.
///
/// Low nibble is the foreground, high nibble the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Attribute(u8);

impl Attribute {
    /// Creates an attribute from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> Attribute {
        Attribute((background as u8) << 4 | (foreground as u8))
    }

    /// Wraps a raw attribute byte.
    pub const fn from_bits(bits: u8) -> Attribute {
        Attribute(bits)
    }

    /// Returns the raw attribute byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Foreground color (low nibble).
    pub fn foreground(self) -> Color {
        Color::ALL[usize::from(self.0 & 0x0F)]
    }

    /// Background color (high nibble).
    pub fn background(self) -> Color {
        Color::ALL[usize::from(self.0 >> 4)]
    }
}

impl From<Color> for Attribute {
    /// A color on black.
    fn from(foreground: Color) -> Self {
        Attribute::new(foreground, Color::Black)
    }
}

/// Light gray on black; the console's resting color.
pub const DEFAULT_ATTRIBUTE: Attribute = Attribute::new(Color::LightGray, Color::Black);

/// Host name segment of the shell prompt.
pub const PROMPT_ATTRIBUTE: Attribute = Attribute::new(Color::LightGreen, Color::Black);

/// Boot banner title.
pub const BANNER_ATTRIBUTE: Attribute = Attribute::new(Color::LightCyan, Color::Black);

/// Title line of the `about` command.
pub const ABOUT_ATTRIBUTE: Attribute = Attribute::new(Color::Yellow, Color::Black);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_packing() {
        let attr = Attribute::new(Color::Yellow, Color::Blue);
        assert_eq!(attr.bits(), 0x1E);
        assert_eq!(attr.foreground(), Color::Yellow);
        assert_eq!(attr.background(), Color::Blue);
    }

    #[test]
    fn test_named_attributes_match_hardware_bytes() {
        assert_eq!(DEFAULT_ATTRIBUTE.bits(), 0x07);
        assert_eq!(PROMPT_ATTRIBUTE.bits(), 0x0A);
        assert_eq!(BANNER_ATTRIBUTE.bits(), 0x0B);
        assert_eq!(ABOUT_ATTRIBUTE.bits(), 0x0E);
    }

    #[test]
    fn test_color_try_from() {
        assert_eq!(Color::try_from(8), Ok(Color::DarkGray));
        assert_eq!(Color::try_from(16), Err(ConsoleError::InvalidColor(16)));
    }

    #[test]
    fn test_palette_order() {
        for (index, color) in Color::ALL.iter().enumerate() {
            assert_eq!(*color as usize, index);
        }
        assert_eq!(Color::LightGray.name(), "grey");
        assert_eq!(Color::LightMagenta.name(), "lt magenta");
    }
}
