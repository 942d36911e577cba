//! Ready-made terminal palettes.
//!
//! Each function builds a fresh [`Palette`], so callers can snap colors to
//! what a given terminal can actually display:
//!
//! ```
//! use palettize::{Color, builtin};
//!
//! let standard = builtin::standard();
//! assert_eq!(standard.index(Color::new(255, 0, 0)), Some(1));
//! ```

use crate::color::Color;
use crate::palette::Palette;

/// Standard 16-color ANSI palette.
pub const STANDARD_COLORS: [Color; 16] = [
    Color::new(0, 0, 0),       // 0: Black
    Color::new(170, 0, 0),     // 1: Red
    Color::new(0, 170, 0),     // 2: Green
    Color::new(170, 85, 0),    // 3: Yellow
    Color::new(0, 0, 170),     // 4: Blue
    Color::new(170, 0, 170),   // 5: Magenta
    Color::new(0, 170, 170),   // 6: Cyan
    Color::new(170, 170, 170), // 7: White
    Color::new(85, 85, 85),    // 8: Bright Black
    Color::new(255, 85, 85),   // 9: Bright Red
    Color::new(85, 255, 85),   // 10: Bright Green
    Color::new(255, 255, 85),  // 11: Bright Yellow
    Color::new(85, 85, 255),   // 12: Bright Blue
    Color::new(255, 85, 255),  // 13: Bright Magenta
    Color::new(85, 255, 255),  // 14: Bright Cyan
    Color::new(255, 255, 255), // 15: Bright White
];

/// Windows 10+ console palette.
pub const WINDOWS_COLORS: [Color; 16] = [
    Color::new(12, 12, 12),    // 0: Black
    Color::new(197, 15, 31),   // 1: Red
    Color::new(19, 161, 14),   // 2: Green
    Color::new(193, 156, 0),   // 3: Yellow
    Color::new(0, 55, 218),    // 4: Blue
    Color::new(136, 23, 152),  // 5: Magenta
    Color::new(58, 150, 221),  // 6: Cyan
    Color::new(204, 204, 204), // 7: White
    Color::new(118, 118, 118), // 8: Bright Black
    Color::new(231, 72, 86),   // 9: Bright Red
    Color::new(22, 198, 12),   // 10: Bright Green
    Color::new(249, 241, 165), // 11: Bright Yellow
    Color::new(59, 120, 255),  // 12: Bright Blue
    Color::new(180, 0, 158),   // 13: Bright Magenta
    Color::new(97, 214, 214),  // 14: Bright Cyan
    Color::new(242, 242, 242), // 15: Bright White
];

// Channel levels of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The 16 standard ANSI colors.
#[must_use]
pub fn standard() -> Palette {
    Palette::new(STANDARD_COLORS.to_vec())
}

/// The 16 Windows console colors.
#[must_use]
pub fn windows() -> Palette {
    Palette::new(WINDOWS_COLORS.to_vec())
}

/// The xterm 256-color palette.
///
/// - 0-15: standard colors
/// - 16-231: 6x6x6 color cube
/// - 232-255: grayscale ramp from 8 to 238
#[must_use]
pub fn eight_bit() -> Palette {
    let mut colors = Vec::with_capacity(256);
    colors.extend_from_slice(&STANDARD_COLORS);

    for &r in &CUBE_LEVELS {
        for &g in &CUBE_LEVELS {
            for &b in &CUBE_LEVELS {
                colors.push(Color::new(r, g, b));
            }
        }
    }

    colors.extend((0u8..24).map(|i| {
        let gray = 8 + i * 10;
        Color::new(gray, gray, gray)
    }));

    Palette::new(colors)
}
