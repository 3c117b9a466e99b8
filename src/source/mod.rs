//! Board snapshot input.
//!
//! The host application normally hands the engine its state directly. The
//! binary instead reads a snapshot file so layouts can be reproduced and
//! inspected offline.

use crate::model::{Board, TileGroup};

pub mod file;

pub use file::{load_snapshot, parse_snapshot};

/// Everything the engine consumes besides the screen width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    /// Groups played on the table.
    pub board: Board,
    /// The player's rack; anchors tile navigation.
    pub rack: TileGroup,
    /// The group being assembled; anchors tileset navigation.
    pub virtual_tileset: TileGroup,
}
