//! Gallery tile size computation.
//!
//! Sizes `n` equally-sized tiles inside a container so they cover as much
//! of it as possible while keeping each tile's aspect ratio between a
//! caller-supplied minimum and a fixed maximum.
//!
//! The computation runs in three steps:
//!
//! 1. [`determine_columns`] proposes at most four column counts.
//! 2. [`define_tile`] evaluates each into concrete pixel geometry.
//! 3. [`select_best`] keeps the largest tile, preferring more columns on ties.
//!
//! # Example
//!
//! ```
//! use zentile::{Container, GalleryParams};
//!
//! let tile = GalleryParams::new(4, Container::new(1920, 1080), 16.0 / 9.0).compute();
//!
//! assert_eq!((tile.columns, tile.rows), (2, 2));
//! assert_eq!(tile.width_css().to_string(), "50.0%");
//! assert_eq!(tile.height_css().to_string(), "540px");
//! ```

use core::fmt;
use core::num::NonZeroU32;

use log::{debug, trace};
use num_traits::Float;

use crate::columns::ColumnCandidates;
use crate::tile::TileSize;

/// Largest tile width / height ratio when no column cap is set.
pub const MAX_TILE_ASPECT_RATIO: f64 = 2.0;

/// Largest tile width / height ratio when a column cap is set.
pub const CAPPED_MAX_TILE_ASPECT_RATIO: f64 = 1.85;

/// Tile counts for which a square grid is always proposed.
pub const SQUARE_TILE_COUNTS: [u32; 4] = [4, 9, 16, 25];

const LOG_TARGET: &str = "zentile::gallery";

/// Pixel dimensions of the box that holds the tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Container {
    /// Create a new container.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width / height. Infinite when the height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Inputs to a gallery tile computation.
///
/// # Example
///
/// ```
/// use zentile::{Container, GalleryParams};
///
/// let tile = GalleryParams::new(12, Container::new(1920, 1080), 1.77)
///     .max_columns(3)
///     .compute();
///
/// assert_eq!(tile.columns, 3);
/// assert_eq!(tile.max_tile_aspect_ratio, 1.85);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GalleryParams {
    /// Number of tiles to lay out.
    pub tiles: u32,
    /// Box around the tiles. `None` yields an empty result.
    pub container: Option<Container>,
    /// Lower bound on tile width / height (e.g. `16.0 / 9.0`).
    pub min_tile_aspect_ratio: f64,
    /// Upper bound on the column count. `None` means unbounded.
    pub max_columns: Option<NonZeroU32>,
}

impl GalleryParams {
    /// Parameters for `tiles` tiles in `container`, with no column cap.
    pub fn new(tiles: u32, container: Container, min_tile_aspect_ratio: f64) -> Self {
        Self {
            tiles,
            container: Some(container),
            min_tile_aspect_ratio,
            max_columns: None,
        }
    }

    /// Parameters with no container yet (e.g. before the first measurement).
    pub fn without_container(tiles: u32, min_tile_aspect_ratio: f64) -> Self {
        Self {
            tiles,
            container: None,
            min_tile_aspect_ratio,
            max_columns: None,
        }
    }

    /// Cap the column count. Zero removes the cap.
    pub fn max_columns(mut self, max_columns: u32) -> Self {
        self.max_columns = NonZeroU32::new(max_columns);
        self
    }

    /// Set or replace the container.
    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Upper bound on tile width / height for these parameters.
    pub fn max_tile_aspect_ratio(&self) -> f64 {
        if self.max_columns.is_some() {
            CAPPED_MAX_TILE_ASPECT_RATIO
        } else {
            MAX_TILE_ASPECT_RATIO
        }
    }

    /// Check the inputs without computing anything.
    ///
    /// [`compute`](Self::compute) never fails; this is for callers that
    /// want to reject bad input before it reaches the layout.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.tiles == 0 {
            return Err(GalleryError::ZeroTileCount);
        }
        let container = self.container.ok_or(GalleryError::MissingContainer)?;
        if container.is_empty() {
            return Err(GalleryError::ZeroContainerDimension);
        }
        if !self.min_tile_aspect_ratio.is_finite() || self.min_tile_aspect_ratio <= 0.0 {
            return Err(GalleryError::InvalidAspectRatio);
        }
        Ok(())
    }

    /// Compute the tile size. Degenerate input yields [`TileSize::EMPTY`].
    pub fn compute(&self) -> TileSize {
        gallery_mode_tile_size(self)
    }
}

/// Input rejected by [`GalleryParams::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GalleryError {
    /// No tiles to lay out.
    ZeroTileCount,
    /// No container was supplied.
    MissingContainer,
    /// Container width or height is zero.
    ZeroContainerDimension,
    /// Minimum tile aspect ratio is not a positive finite number.
    InvalidAspectRatio,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroTileCount => "tile count is zero",
            Self::MissingContainer => "no container supplied",
            Self::ZeroContainerDimension => "container width or height is zero",
            Self::InvalidAspectRatio => "minimum tile aspect ratio must be positive and finite",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GalleryError {}

/// One evaluated column count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub columns: u32,
    /// `ceil(tiles / columns)`.
    pub rows: u32,
    /// Tile width in pixels.
    pub width: f64,
    /// Tile height in pixels.
    pub height: f64,
    /// `width * height`.
    pub area: f64,
}

/// Size `params.tiles` tiles inside `params.container`.
///
/// Returns [`TileSize::EMPTY`] when there are no tiles, no container, or
/// the container has a zero side.
pub fn gallery_mode_tile_size(params: &GalleryParams) -> TileSize {
    let container = match params.container {
        Some(c) if params.tiles > 0 && !c.is_empty() => c,
        _ => {
            debug!(target: LOG_TARGET, "degenerate input {params:?}, returning empty tile");
            return TileSize::EMPTY;
        }
    };

    let n = params.tiles;
    let min_ar = params.min_tile_aspect_ratio;
    let max_ar = params.max_tile_aspect_ratio();

    // Column:row ratio at which tiles exactly hit the minimum aspect ratio.
    let ideal_column_to_row_ratio = container.aspect_ratio() / min_ar;

    let candidates = determine_columns(n, ideal_column_to_row_ratio, max_ar * 2.0);
    let evaluated = candidates.iter().map(|c| {
        let columns = match params.max_columns {
            Some(cap) => cap.get().min(c),
            None => c,
        };
        let candidate = define_tile(n, min_ar, max_ar, container, columns);
        trace!(target: LOG_TARGET, "candidate {c} -> {candidate:?}");
        candidate
    });

    // Never empty: determine_columns always yields at least one count.
    let Some(best) = select_best(evaluated) else {
        return TileSize::EMPTY;
    };

    debug!(
        target: LOG_TARGET,
        "{n} tiles in {}x{}: {}x{} grid, tile {}x{}",
        container.width,
        container.height,
        best.columns,
        best.rows,
        best.width,
        best.height
    );

    TileSize::new(best.columns, best.rows, best.width, best.height, max_ar)
}

/// Propose column counts for `n` tiles.
///
/// `ideal_column_to_row_ratio` is the container aspect ratio divided by the
/// minimum tile aspect ratio. A single row is proposed once it reaches
/// `single_row_ratio_threshold`.
pub fn determine_columns(
    n: u32,
    ideal_column_to_row_ratio: f64,
    single_row_ratio_threshold: f64,
) -> ColumnCandidates {
    // One tile fills the container regardless of aspect ratio.
    if n == 1 {
        return ColumnCandidates::single(1);
    }

    // Two tiles go side by side only if the container is wide enough.
    if n == 2 {
        return ColumnCandidates::single(if ideal_column_to_row_ratio > 1.0 { 2 } else { 1 });
    }

    // rows = columns / ratio and rows * columns >= n give columns >= sqrt(n * ratio).
    let c = (Float::floor(Float::sqrt(n as f64 * ideal_column_to_row_ratio)) as u32).max(1);

    let mut set = ColumnCandidates::new();
    if SQUARE_TILE_COUNTS.contains(&n) {
        set.push(Float::sqrt(n as f64) as u32);
    }
    if ideal_column_to_row_ratio >= single_row_ratio_threshold {
        set.push(n);
    }
    set.push(c);
    set.push(c.saturating_add(1));
    set
}

/// Evaluate the tile geometry for a fixed column count.
///
/// Tiles fill the column width, then shrink in height to fit all rows,
/// then narrow so width / height stays at most `max_tile_aspect_ratio`.
pub fn define_tile(
    n: u32,
    min_tile_aspect_ratio: f64,
    max_tile_aspect_ratio: f64,
    container: Container,
    columns: u32,
) -> Candidate {
    let columns = columns.max(1);
    let rows = n.div_ceil(columns).max(1);

    let raw_width = Float::floor(container.width as f64 / columns as f64);
    let ideal_height = raw_width / min_tile_aspect_ratio;
    let constrained_height = container.height as f64 / rows as f64;
    let height = ideal_height.min(constrained_height);
    let width = (height * max_tile_aspect_ratio).min(raw_width);

    Candidate {
        columns,
        rows,
        width,
        height,
        area: width * height,
    }
}

/// Pick the candidate with the largest area, then the most columns.
///
/// Among exact duplicates the first one wins. Returns `None` only for an
/// empty iterator.
pub fn select_best(candidates: impl IntoIterator<Item = Candidate>) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for candidate in candidates {
        let better = match &best {
            None => true,
            Some(b) => {
                candidate.area > b.area
                    || (candidate.area == b.area && candidate.columns > b.columns)
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}
