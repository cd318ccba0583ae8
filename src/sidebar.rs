//! Sidebar capacity estimation.
//!
//! The sidebar uses fixed-size tiles, so its capacity depends only on the
//! container and a few policy constants.

use num_traits::Float;

use crate::gallery::Container;

/// Hard limit on tiles with video on screen at once.
///
/// The video bridge relays at most 24 streams to any endpoint; the local
/// tile makes 25.
pub const MAX_ONSCREEN_TILES: u32 = 25;

/// Side of the largest square grid within [`MAX_ONSCREEN_TILES`].
pub const MAX_TILES_GRID_SIZE: u32 = 5;

/// Sidebar tile width in pixels. Also the minimum sidebar width.
pub const DEFAULT_TILE_WIDTH: u32 = 200;

/// Sidebar tile aspect ratio (3:2).
pub const DEFAULT_TILE_AR: f64 = 3.0 / 2.0;

/// How many tiles fit in a sidebar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SidebarCapacity {
    /// Columns of [`DEFAULT_TILE_WIDTH`] tiles, between 1 and [`MAX_TILES_GRID_SIZE`].
    pub max_columns: u32,
    /// Tiles that fit, between 1 and [`MAX_ONSCREEN_TILES`].
    pub total: u32,
}

/// Estimate sidebar capacity. `None` when there is no container.
///
/// ```
/// use zentile::{Container, sidebar_max_tiles};
///
/// let cap = sidebar_max_tiles(Some(Container::new(450, 300))).unwrap();
/// assert_eq!((cap.max_columns, cap.total), (2, 4));
/// assert_eq!(sidebar_max_tiles(None), None);
/// ```
pub fn sidebar_max_tiles(container: Option<Container>) -> Option<SidebarCapacity> {
    container.map(Container::sidebar_capacity)
}

impl Container {
    /// Sidebar capacity of this container.
    pub fn sidebar_capacity(self) -> SidebarCapacity {
        let max_columns = (self.width / DEFAULT_TILE_WIDTH).clamp(1, MAX_TILES_GRID_SIZE);
        let tile_height = DEFAULT_TILE_WIDTH as f64 / DEFAULT_TILE_AR;
        let rows = Float::floor(self.height as f64 / tile_height) as u32;
        let total = rows
            .saturating_mul(max_columns)
            .clamp(1, MAX_ONSCREEN_TILES);
        SidebarCapacity { max_columns, total }
    }
}
