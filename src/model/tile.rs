//! Tile identity and derived face attributes.
//!
//! A full set holds 106 tiles: two copies of each of the 52 numbered faces
//! (1..=13 in four colors) plus two jokers. A tile is identified by its id
//! alone; every other attribute is computed from it.

use std::fmt;

/// Number of numbered faces (13 numbers x 4 colors).
pub const FACE_COUNT: u8 = 52;

/// Highest valid tile id (the second joker).
pub const MAX_TILE_ID: u8 = 105;

/// First joker id. Ids below this are numbered tiles.
const FIRST_JOKER_ID: u8 = FACE_COUNT * 2;

/// Error returned when a raw id falls outside `0..=105`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tile id must be in 0..={MAX_TILE_ID} (got {0})")]
pub struct InvalidTileId(pub u16);

/// Tile color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileColor {
    /// Faces 0..13.
    Black,
    /// Faces 13..26.
    Red,
    /// Faces 26..39.
    Blue,
    /// Faces 39..52.
    Orange,
}

impl TileColor {
    fn from_face(face: u8) -> Self {
        match face / 13 {
            0 => Self::Black,
            1 => Self::Red,
            2 => Self::Blue,
            _ => Self::Orange,
        }
    }

    /// Single-letter label used in text dumps.
    pub fn initial(&self) -> char {
        match self {
            Self::Black => 'K',
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Orange => 'O',
        }
    }
}

/// What a tile shows on its face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// A numbered tile.
    Numbered {
        /// Face value, 1..=13.
        number: u8,
        /// Face color.
        color: TileColor,
    },
    /// A joker.
    Joker,
}

/// A single game tile.
///
/// # Invariants
/// - Id is always in `0..=105`
/// - Equality, hashing and ordering use the id only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    /// Smart constructor: validates the id range.
    pub fn new(id: u16) -> Result<Self, InvalidTileId> {
        if id > MAX_TILE_ID as u16 {
            Err(InvalidTileId(id))
        } else {
            Ok(Self(id as u8))
        }
    }

    /// Raw tile id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Whether this is one of the two jokers.
    pub fn is_joker(&self) -> bool {
        self.0 >= FIRST_JOKER_ID
    }

    /// Face index in `0..52`, or `None` for jokers.
    pub fn face(&self) -> Option<u8> {
        if self.is_joker() {
            None
        } else {
            Some(self.0 % FACE_COUNT)
        }
    }

    /// Which of the two physical copies this is (0 or 1).
    pub fn copy_index(&self) -> u8 {
        if self.is_joker() {
            self.0 - FIRST_JOKER_ID
        } else {
            self.0 / FACE_COUNT
        }
    }

    /// Face value and color, derived from the id.
    pub fn kind(&self) -> TileKind {
        match self.face() {
            Some(face) => TileKind::Numbered {
                number: face % 13 + 1,
                color: TileColor::from_face(face),
            },
            None => TileKind::Joker,
        }
    }

    /// Face value 1..=13, `None` for jokers.
    pub fn number(&self) -> Option<u8> {
        match self.kind() {
            TileKind::Numbered { number, .. } => Some(number),
            TileKind::Joker => None,
        }
    }

    /// Face color, `None` for jokers.
    pub fn color(&self) -> Option<TileColor> {
        match self.kind() {
            TileKind::Numbered { color, .. } => Some(color),
            TileKind::Joker => None,
        }
    }
}

impl TryFrom<u16> for Tile {
    type Error = InvalidTileId;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TileKind::Numbered { number, color } => write!(f, "{}{}", number, color.initial()),
            TileKind::Joker => write!(f, "J"),
        }
    }
}
