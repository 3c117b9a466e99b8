//! Board layout and arrow-key navigation for a terminal tile game client.
//!
//! Two pure, synchronous stages:
//!
//! 1. [`layout::BoardLayoutService`] packs the played groups into rows no
//!    wider than the screen, memoized by content.
//! 2. [`navigation::ScrollNavigationService`] projects those rows onto
//!    screen columns and links every tile (and every group) to its
//!    up/down/left/right neighbor, so an arrow press resolves to the next
//!    highlight with a single lookup.
//!
//! ```
//! use rummi_board::layout::{BoardLayoutService, LayoutParams};
//! use rummi_board::model::{Board, Direction, Tile, TileGroup};
//! use rummi_board::navigation::ScrollNavigationService;
//!
//! let board: Board = [TileGroup::from_ids([1, 2, 3]).unwrap()].into_iter().collect();
//! let rack = TileGroup::from_ids([40, 41]).unwrap();
//!
//! let mut layout = BoardLayoutService::new(80, LayoutParams::default(), 16);
//! let rows = layout.rows(&board);
//!
//! let mut nav = ScrollNavigationService::new(80, LayoutParams::default(), 16);
//! nav.update_graphs(&rows, &TileGroup::empty(), &rack);
//!
//! let from = Tile::new(40).unwrap();
//! assert_eq!(nav.scroll_tile(Direction::Right, from), Tile::new(41).ok());
//! assert!(nav.scroll_tile(Direction::Up, from).is_some());
//! ```

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod report;
pub mod source;
