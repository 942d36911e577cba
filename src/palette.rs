//! Ordered color palettes and nearest-color matching.
//!
//! A [`Palette`] is an ordered list of [`Color`]s. [`Palette::convert`] snaps
//! an arbitrary color to the visually closest entry using
//! [`Color::distance`], and passes it through unchanged when the palette is
//! empty.
//!
//! # Examples
//!
//! ```
//! use palettize::{Color, Palette};
//!
//! let palette = Palette::from_hex(["#000000", "#FFFFFF", "#FF0000"]).unwrap();
//!
//! assert_eq!(palette.index(Color::new(200, 30, 20)), Some(2));
//! assert_eq!(palette.convert(Color::new(240, 240, 230)), Color::new(255, 255, 255));
//!
//! // Nothing to snap to: the input comes back as-is.
//! let empty = Palette::default();
//! assert_eq!(empty.convert(Color::new(1, 2, 3)), Color::new(1, 2, 3));
//! ```

use log::{debug, trace};

use crate::color::{Color, InvalidColorHex};

/// An ordered set of reference colors.
///
/// Order matters only for the indices returned by lookups and for ties: the
/// lowest index wins. Duplicate entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from colors, keeping their order.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        debug!("palette created with {} entries", colors.len());
        Self { colors }
    }

    /// Create a palette from hex strings such as `"#1A2B3C"`.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidColorHex`] of the first entry that does not parse.
    pub fn from_hex<I, S>(hexes: I) -> Result<Self, InvalidColorHex>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = hexes
            .into_iter()
            .map(|hex| Color::from_hex(hex.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(colors))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// All entries in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Find the closest entry to `color` and its distance.
    ///
    /// Scans from index 0 and stops at the first exact match. Otherwise the
    /// earliest entry with the smallest distance wins. Returns `None` for an
    /// empty palette.
    #[must_use]
    pub fn nearest(&self, color: Color) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;

        for (i, &entry) in self.colors.iter().enumerate() {
            let distance = entry.distance(color);
            if distance <= 0.0 {
                return Some((i, distance));
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }

        best
    }

    /// Index of the entry closest to `color`.
    ///
    /// Returns `None` only when the palette is empty.
    #[must_use]
    pub fn index(&self, color: Color) -> Option<usize> {
        self.nearest(color).map(|(i, _)| i)
    }

    /// Snap `color` to the closest palette entry.
    ///
    /// An empty palette returns `color` unchanged.
    #[must_use]
    pub fn convert(&self, color: Color) -> Color {
        match self.index(color) {
            Some(i) => self.colors[i],
            None => {
                trace!("empty palette, passing {color} through");
                color
            }
        }
    }

    /// Same result as [`Palette::index`], with the scan split across the
    /// rayon thread pool.
    ///
    /// Worth it only for large palettes.
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn par_index(&self, color: Color) -> Option<usize> {
        use rayon::prelude::*;

        // Integer distances order exactly like their square roots, and the
        // index breaks ties, so the reduction order does not matter.
        self.colors
            .par_iter()
            .enumerate()
            .map(|(i, entry)| (entry.distance_squared(color), i))
            .min()
            .map(|(_, i)| i)
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl From<&[Color]> for Palette {
    fn from(colors: &[Color]) -> Self {
        Self::new(colors.to_vec())
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Color, Palette};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Palette {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.colors.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Palette {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Vec::<Color>::deserialize(deserializer).map(Palette::new)
        }
    }
}
