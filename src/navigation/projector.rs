//! Horizontal projection of navigable elements.
//!
//! Every row is assumed to be centered on the screen. Walking a row left to
//! right from its leftmost column gives each tile (or each whole group) a
//! column offset, which is what vertical neighbor matching compares.

use crate::layout::{LayoutParams, Row};
use crate::model::{Tile, TileGroup};

/// An element paired with its projected column offset.
///
/// Offsets may be negative when a row is wider than the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDistance<T> {
    /// The navigable element.
    pub element: T,
    /// Column offset from the left screen edge.
    pub offset: i32,
}

impl<T> EdgeDistance<T> {
    /// Pair an element with its offset.
    pub fn new(element: T, offset: i32) -> Self {
        Self { element, offset }
    }
}

/// Leftmost column of a centered row: `floor((capacity - row_width) / 2)`.
///
/// Not clamped, so an overflowing row starts left of the screen edge.
pub fn leftmost_offset(capacity: u16, row_width: u32) -> i32 {
    let slack = i64::from(capacity) - i64::from(row_width);
    slack.div_euclid(2).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Per-tile offsets. Rows are given bottom-to-top and keep that order.
///
/// The tile at index `i` of a group starting at column `x` sits at
/// `x + i * tile_width`.
pub fn project_tiles(
    rows: &[Row],
    capacity: u16,
    params: &LayoutParams,
) -> Vec<Vec<EdgeDistance<Tile>>> {
    let tile_width = i32::from(params.tile_width);
    project(rows, capacity, params, |group, start, out| {
        let mut offset = start;
        for tile in group.tiles() {
            out.push(EdgeDistance::new(*tile, offset));
            offset += tile_width;
        }
    })
}

/// Per-group offsets, measured at each group's center.
pub fn project_tilesets(
    rows: &[Row],
    capacity: u16,
    params: &LayoutParams,
) -> Vec<Vec<EdgeDistance<TileGroup>>> {
    project(rows, capacity, params, |group, start, out| {
        let half = (group.width(params) / 2) as i32;
        out.push(EdgeDistance::new(group.clone(), start + half));
    })
}

fn project<T, F>(rows: &[Row], capacity: u16, params: &LayoutParams, mut emit: F) -> Vec<Vec<EdgeDistance<T>>>
where
    F: FnMut(&TileGroup, i32, &mut Vec<EdgeDistance<T>>),
{
    rows.iter()
        .map(|row| {
            let mut running = leftmost_offset(capacity, row.width(params));
            let mut projected = Vec::new();
            for group in row.groups() {
                emit(group, running, &mut projected);
                running += group.width(params) as i32;
            }
            projected
        })
        .collect()
}
