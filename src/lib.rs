//! # palettize
//!
//! Perceptual color comparison and nearest-color palette matching.
//!
//! Given an arbitrary RGB color and a fixed set of palette colors, this crate
//! finds which palette entry looks closest, using a redmean-weighted distance
//! that tracks human perception better than plain Euclidean RGB distance.
//!
//! ## Quick Start
//!
//! ```
//! use palettize::prelude::*;
//!
//! let palette: Palette = ["#000000", "#FFFFFF", "#FF0000"]
//!     .iter()
//!     .map(|hex| Color::from_hex(hex))
//!     .collect::<Result<_, _>>()?;
//!
//! let snapped = palette.convert(Color::new(210, 40, 30));
//! assert_eq!(snapped.hex(), "#FF0000");
//! # Ok::<(), palettize::InvalidColorHex>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: an RGB value with hex parsing, a perceptual distance and a gray test
//! - **Palette**: an ordered list of colors with nearest-entry lookup
//! - **builtin**: the ANSI, Windows console and xterm 256-color palettes
//!
//! ## Features
//!
//! - `serde`: (de)serialize colors as `#RRGGBB` strings and palettes as lists of them
//! - `rayon`: [`Palette::par_index`] for splitting large scans across threads

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builtin;
pub mod color;
pub mod palette;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::builtin;
    pub use crate::color::{Color, InvalidColorHex};
    pub use crate::palette::Palette;
}

// Re-export key types at crate root
pub use color::{Color, InvalidColorHex};
pub use palette::Palette;
