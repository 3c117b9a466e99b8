//! Cell geometry shared by packing and projection.

/// Default width of one tile cell in columns (`13R` fits in three).
pub const DEFAULT_TILE_WIDTH: u16 = 3;

/// Default border columns around a group (one on each side).
pub const DEFAULT_GROUP_PADDING: u16 = 2;

/// Geometry that determines every group's on-screen width.
///
/// Part of every cache key: if the params change, cached rows and graphs
/// no longer apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutParams {
    /// Columns occupied by one tile.
    pub tile_width: u16,
    /// Fixed columns added to every group regardless of its length.
    pub group_padding: u16,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(tile_width: u16, group_padding: u16) -> Self {
        Self {
            tile_width,
            group_padding,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_WIDTH, DEFAULT_GROUP_PADDING)
    }
}
