//! Computed tile dimensions and their CSS representation.
//!
//! [`TileSize`] carries the numeric result of a gallery computation.
//! The `*_css()` accessors render lengths without allocating; with the
//! `alloc` feature, [`TileSize::to_css`] produces owned strings ready to
//! assign as CSS custom properties.

use core::fmt;

use num_traits::Float;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::{String, ToString};

/// CSS custom property receiving the tile width.
pub const TILE_WIDTH_PROPERTY: &str = "--tileW";
/// CSS custom property receiving the tile height.
pub const TILE_HEIGHT_PROPERTY: &str = "--tileH";
/// CSS custom property receiving the maximum tile width.
pub const TILE_MAX_WIDTH_PROPERTY: &str = "--tileMaxW";

/// Size of one gallery tile.
///
/// Width is relative to the container (`width_percent`), height is absolute.
/// `pixel_width` is the width the tile was evaluated at, kept for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileSize {
    /// Number of grid columns. Zero only for [`TileSize::EMPTY`].
    pub columns: u32,
    /// Number of grid rows. Zero only for [`TileSize::EMPTY`].
    pub rows: u32,
    /// `100 / columns`, truncated to one decimal place.
    pub width_percent: f64,
    /// Evaluated tile width in pixels.
    pub pixel_width: f64,
    /// Tile height in pixels (not rounded).
    pub height: f64,
    /// Largest width a tile may stretch to: `max_tile_aspect_ratio * height`.
    pub max_width: f64,
    /// Upper bound on width / height used for this layout.
    pub max_tile_aspect_ratio: f64,
}

impl TileSize {
    /// The "no tiles" result returned for degenerate input.
    pub const EMPTY: Self = Self {
        columns: 0,
        rows: 0,
        width_percent: 0.0,
        pixel_width: 0.0,
        height: 0.0,
        max_width: 0.0,
        max_tile_aspect_ratio: 0.0,
    };

    /// Build the output for a chosen grid.
    pub(crate) fn new(
        columns: u32,
        rows: u32,
        pixel_width: f64,
        height: f64,
        max_tile_aspect_ratio: f64,
    ) -> Self {
        Self {
            columns,
            rows,
            width_percent: truncated_percent(columns),
            pixel_width,
            height,
            max_width: max_tile_aspect_ratio * height,
            max_tile_aspect_ratio,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0
    }

    /// Width / height of the evaluated tile. `None` when there is no height.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height > 0.0 {
            Some(self.pixel_width / self.height)
        } else {
            None
        }
    }

    pub fn width_css(&self) -> CssPercent {
        CssPercent {
            value: self.width_percent,
            empty: self.is_empty(),
        }
    }

    pub fn height_css(&self) -> CssPixels {
        CssPixels(self.height)
    }

    pub fn max_width_css(&self) -> CssPixels {
        CssPixels(self.max_width)
    }

    /// Render all three lengths as owned strings.
    #[cfg(feature = "alloc")]
    pub fn to_css(&self) -> CssTileSize {
        CssTileSize {
            width: self.width_css().to_string(),
            height: self.height_css().to_string(),
            max_width: self.max_width_css().to_string(),
        }
    }
}

/// Percentage of the container width.
///
/// Always rendered with one decimal place (`50.0%`), except for the empty
/// tile, which renders as `0%`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CssPercent {
    value: f64,
    empty: bool,
}

impl fmt::Display for CssPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.empty {
            f.write_str("0%")
        } else {
            write!(f, "{:.1}%", self.value)
        }
    }
}

/// Absolute length in pixels, rendered as the shortest decimal that
/// round-trips (`540px`, `451.9774011299435px`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CssPixels(pub f64);

impl fmt::Display for CssPixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Tile size as CSS length strings.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CssTileSize {
    /// Percentage of container width, e.g. `"33.3%"`.
    pub width: String,
    /// Pixel height, e.g. `"270px"`.
    pub height: String,
    /// Pixel max width, e.g. `"499.5px"`.
    pub max_width: String,
}

#[cfg(feature = "alloc")]
impl CssTileSize {
    /// `(property, value)` pairs for the tile custom properties.
    pub fn custom_properties(&self) -> [(&'static str, &str); 3] {
        [
            (TILE_WIDTH_PROPERTY, self.width.as_str()),
            (TILE_HEIGHT_PROPERTY, self.height.as_str()),
            (TILE_MAX_WIDTH_PROPERTY, self.max_width.as_str()),
        ]
    }
}

/// `100 / columns`, truncated (not rounded) to one decimal so that
/// `columns` tiles never sum past 100%.
fn truncated_percent(columns: u32) -> f64 {
    if columns == 0 {
        return 0.0;
    }
    Float::floor(100.0 / columns as f64 * 10.0) / 10.0
}
