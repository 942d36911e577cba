//! RGB color values with a perceptually weighted distance.
//!
//! [`Color`] is a plain three-channel value. It parses from and formats to
//! `#RRGGBB` hex text, measures how different two colors look with
//! [`Color::distance`], and answers whether it is close enough to neutral
//! to count as gray.
//!
//! # Examples
//!
//! ## Parsing and Formatting
//!
//! ```
//! use palettize::color::Color;
//!
//! let orange = Color::from_hex("#ff8800").unwrap();
//! assert_eq!(orange, Color::new(255, 136, 0));
//!
//! // The leading `#` is optional and case does not matter.
//! assert_eq!(Color::from_hex("FF8800").unwrap(), orange);
//!
//! // Formatting is always uppercase with a `#`.
//! assert_eq!(orange.hex(), "#FF8800");
//! ```
//!
//! ## Comparing Colors
//!
//! ```
//! use palettize::color::Color;
//!
//! let red = Color::new(255, 0, 0);
//! let dark_red = Color::new(170, 0, 0);
//! let blue = Color::new(0, 0, 255);
//!
//! assert!(red.distance(dark_red) < red.distance(blue));
//! assert_eq!(red.distance(red), 0.0);
//! ```

use std::fmt;
use std::str::FromStr;

/// Largest pairwise channel difference a color may have and still be gray.
pub const GRAY_TOLERANCE: u8 = 5;

// Red weight is `RED_BASE + rmean`, blue weight is `BLUE_BASE - rmean`, both
// scaled down by `WEIGHT_SHIFT` bits. Green has a fixed weight.
const RED_BASE: i64 = 512;
const GREEN_WEIGHT: i64 = 4;
const BLUE_BASE: i64 = 767;
const WEIGHT_SHIFT: u32 = 8;

/// RGB color with channel values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Create a new color from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a color from hex text.
    ///
    /// Accepts exactly six hex digits, optionally preceded by `#`. Digits are
    /// case-insensitive. Shorthand (`#RGB`), alpha and named colors are not
    /// supported.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorHex`] if the text without its `#` is not six
    /// characters long or contains anything other than hex digits.
    pub fn from_hex(text: &str) -> Result<Self, InvalidColorHex> {
        let hex = text.strip_prefix('#').unwrap_or(text);

        // from_str_radix tolerates a leading '+', so check the digits first.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColorHex::new(text));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| InvalidColorHex::new(text))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Returns the color as `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Weighted sum of squared channel differences.
    ///
    /// This is the value under the square root in [`Color::distance`]. The red
    /// and blue terms are truncated by a right shift before summing, so the
    /// result is an exact integer.
    #[must_use]
    pub fn distance_squared(&self, other: Self) -> u32 {
        let (r1, g1, b1) = (i64::from(self.red), i64::from(self.green), i64::from(self.blue));
        let (r2, g2, b2) = (i64::from(other.red), i64::from(other.green), i64::from(other.blue));

        let red_mean = (r1 + r2) / 2;
        let red_diff = r1 - r2;
        let green_diff = g1 - g2;
        let blue_diff = b1 - b2;

        let red_term = ((RED_BASE + red_mean) * red_diff * red_diff) >> WEIGHT_SHIFT;
        let green_term = GREEN_WEIGHT * green_diff * green_diff;
        let blue_term = ((BLUE_BASE - red_mean) * blue_diff * blue_diff) >> WEIGHT_SHIFT;

        // Bounded by roughly 650_000, so the conversion cannot fail.
        u32::try_from(red_term + green_term + blue_term).unwrap_or(u32::MAX)
    }

    /// Perceptual distance to another color.
    ///
    /// A redmean-weighted Euclidean distance in RGB space. Red differences
    /// count more for reddish pairs, blue differences count less, and green
    /// has a fixed 4x weight. Symmetric, and zero only for identical colors.
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    /// Returns true if no two channels differ by more than [`GRAY_TOLERANCE`].
    #[must_use]
    pub fn is_gray(&self) -> bool {
        let max_diff = self
            .red
            .abs_diff(self.green)
            .max(self.red.abs_diff(self.blue))
            .max(self.blue.abs_diff(self.green));

        max_diff <= GRAY_TOLERANCE
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = InvalidColorHex;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = InvalidColorHex;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColorHex;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(value.as_str())
    }
}

/// Error returned when text is not a valid `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorHex {
    input: String,
}

impl InvalidColorHex {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color hex string: {:?}", self.input)
    }
}

impl std::error::Error for InvalidColorHex {}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Color;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.hex())
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Color::from_hex(&text).map_err(de::Error::custom)
        }
    }
}
