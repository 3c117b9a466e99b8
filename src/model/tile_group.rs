//! Ordered runs of tiles.

use super::tile::{InvalidTileId, Tile};
use crate::layout::layout_params::LayoutParams;
use std::fmt;

/// An ordered run of tiles played (or held) as one unit.
///
/// Equality, hashing and ordering follow the exact tile sequence, so
/// `[1, 2, 3]` and `[3, 2, 1]` are different groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileGroup(Vec<Tile>);

impl TileGroup {
    /// Create a group from tiles in display order.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self(tiles)
    }

    /// Create an empty group (an empty rack or virtual tileset).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a group from raw ids, validating each one.
    pub fn from_ids<I>(ids: I) -> Result<Self, InvalidTileId>
    where
        I: IntoIterator<Item = u16>,
    {
        ids.into_iter()
            .map(Tile::new)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Tiles in display order.
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the group holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// On-screen footprint in columns: one cell per tile plus the border.
    pub fn width(&self, params: &LayoutParams) -> u32 {
        self.0.len() as u32 * params.tile_width as u32 + params.group_padding as u32
    }
}

impl From<Vec<Tile>> for TileGroup {
    fn from(tiles: Vec<Tile>) -> Self {
        Self(tiles)
    }
}

impl fmt::Display for TileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tile) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", tile)?;
        }
        write!(f, "]")
    }
}
