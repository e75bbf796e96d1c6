//! Layer prefixes.
//!
//! Layers are numbered from the face a move names, starting at 1 for the
//! outermost layer. On a 3x3x3 cube, `1R` is `R`, `2R` is the middle layer,
//! and `3R` is the layer under `L`.

use std::fmt;
use std::ops::RangeInclusive;

/// Layer numbers written before a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LayerPrefix {
    /// Single layer, such as `2` in `2R`. Before a wide move, such as `3` in
    /// `3Rw`, this is the number of layers turned.
    Single(u8),
    /// Inclusive range of layers, such as `2-3` in `2-3R`.
    Range(u8, u8),
}

impl fmt::Display for LayerPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerPrefix::Single(layer) => write!(f, "{layer}"),
            LayerPrefix::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

impl LayerPrefix {
    /// Returns the prefix for a range of layers, using [`LayerPrefix::Single`]
    /// if the range contains one layer.
    pub fn from_range(lo: u8, hi: u8) -> Self {
        if lo == hi {
            LayerPrefix::Single(lo)
        } else {
            LayerPrefix::Range(lo, hi)
        }
    }

    /// Returns the layers named by the prefix when it is not on a wide move.
    pub fn layers(self) -> RangeInclusive<u8> {
        match self {
            LayerPrefix::Single(layer) => layer..=layer,
            LayerPrefix::Range(lo, hi) => lo..=hi,
        }
    }

    /// Returns an error message if the prefix names no layers.
    pub(crate) fn check(self) -> Result<(), &'static str> {
        let layers = self.layers();
        if *layers.start() == 0 {
            Err("layer numbers start at 1")
        } else if layers.is_empty() {
            Err("layer range is empty")
        } else {
            Ok(())
        }
    }
}
