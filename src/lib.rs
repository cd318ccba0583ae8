//! Gallery tile layout computation with aspect-ratio bounds and column caps.
//!
//! Pure geometry: no DOM, no rendering, no shared state, `no_std` compatible.
//! Identical inputs always produce identical output.
//!
//! # Modules
//!
//! - [`gallery`] — Candidate column generation, tile evaluation, and selection
//! - [`columns`] — Fixed-capacity candidate set
//! - [`tile`] — Computed tile size and its CSS lengths
//! - [`sidebar`] — Sidebar capacity under fixed tile size
//!
//! # Example
//!
//! ```
//! use zentile::{Container, GalleryParams};
//!
//! let css = GalleryParams::new(2, Container::new(1600, 900), 1.77)
//!     .compute()
//!     .to_css();
//!
//! assert_eq!(css.width, "50.0%");
//! assert_eq!(css.height, "451.9774011299435px");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod columns;
pub mod gallery;
pub mod sidebar;
pub mod tile;

pub use columns::ColumnCandidates;
pub use gallery::{
    CAPPED_MAX_TILE_ASPECT_RATIO, Candidate, Container, GalleryError, GalleryParams,
    MAX_TILE_ASPECT_RATIO, define_tile, determine_columns, gallery_mode_tile_size, select_best,
};
pub use sidebar::{
    DEFAULT_TILE_AR, DEFAULT_TILE_WIDTH, MAX_ONSCREEN_TILES, SidebarCapacity, sidebar_max_tiles,
};
#[cfg(feature = "alloc")]
pub use tile::CssTileSize;
pub use tile::{CssPercent, CssPixels, TileSize};
