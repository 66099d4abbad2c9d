use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not six hex digits (with optional leading `#`).
    #[error("hex color must be 6 digits, got {0:?}")]
    BadLength(String),
    /// A character is not a hex digit.
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// White, conventionally used for the in-progress drawing overlay.
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Black, used for label text in the traffic demo.
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(hex.to_string()));
        }
        if !digits.is_ascii() {
            return Err(ColorParseError::BadDigit(hex.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::BadDigit(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Color as a BGR tuple, the channel order OpenCV-style annotators use.
    #[inline]
    pub fn as_bgr(&self) -> (u8, u8, u8) {
        (self.b, self.g, self.r)
    }

    /// Color as an RGB tuple.
    #[inline]
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Ordered color palette keyed by zone index.
///
/// Must hold at least one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Palette from hex color strings.
    pub fn from_hex(hex: &[&str]) -> Result<Self, ColorParseError> {
        let colors = hex
            .iter()
            .map(|h| Color::from_hex(h))
            .collect::<Result<_, _>>()?;
        Ok(Self { colors })
    }

    /// Color for an index, wrapping around when the palette is shorter.
    pub fn by_idx(&self, idx: usize) -> Color {
        self.colors[idx % self.colors.len()]
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    /// The traffic demo's four zone colors.
    fn default() -> Self {
        Self {
            colors: vec![
                Color::new(0xE6, 0x19, 0x4B),
                Color::new(0x3C, 0xB4, 0x4B),
                Color::new(0xFF, 0xE1, 0x19),
                Color::new(0x3C, 0x76, 0xD1),
            ],
        }
    }
}
