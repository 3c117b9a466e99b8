//! Keyboard navigation - moving a highlight across the packed rows.
//!
//! # Module Structure
//!
//! - `projector`: EdgeDistance - column offsets of tiles and groups in centered rows
//! - `graph`: ScrollGraph - up/down/left/right links and nearest-column matching
//! - `service`: ScrollNavigationService - live tile and tileset graphs

pub mod graph;
pub mod projector;
pub mod service;

pub use graph::{take_closest, NodeId, ScrollGraph, ScrollGraphNode};
pub use projector::{leftmost_offset, project_tiles, project_tilesets, EdgeDistance};
pub use service::{NavigationGraphs, ScrollNavigationService};
