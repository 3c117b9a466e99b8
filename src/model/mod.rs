//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod board;
pub mod direction;
pub mod error;
pub mod tile;
pub mod tile_group;

// Re-export for convenience
pub use board::Board;
pub use direction::{Direction, UnknownDirection};
pub use error::{AppError, SnapshotError};
pub use tile::{InvalidTileId, Tile, TileColor, TileKind};
pub use tile_group::TileGroup;
