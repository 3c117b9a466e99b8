//! First-fit bin packing of groups into width-bounded rows.

use super::layout_params::LayoutParams;
use super::row::Row;
use crate::model::TileGroup;

/// Packs groups into rows no wider than a capacity.
///
/// Implementations must place every input group exactly once and keep each
/// row within `capacity`, except that a group wider than `capacity` sits
/// alone in its own row.
pub trait RowPacker {
    /// Pack `items`, visited in the iterator's order, into rows.
    fn pack<'a, I>(&self, items: I, capacity: u32, params: &LayoutParams) -> Vec<Row>
    where
        I: IntoIterator<Item = &'a TileGroup>;
}

/// Constant-volume first-fit packer.
///
/// Each group goes into the first row whose running total plus the group's
/// width stays within capacity; otherwise a new row is opened. The result is
/// deterministic for a fixed iteration order but not guaranteed minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitPacker;

impl RowPacker for FirstFitPacker {
    fn pack<'a, I>(&self, items: I, capacity: u32, params: &LayoutParams) -> Vec<Row>
    where
        I: IntoIterator<Item = &'a TileGroup>,
    {
        // Running totals kept beside the rows to avoid re-summing.
        let mut rows: Vec<(Row, u32)> = Vec::new();

        for group in items {
            let width = group.width(params);
            let slot = rows
                .iter_mut()
                .find(|(_, total)| total.saturating_add(width) <= capacity);

            match slot {
                Some((row, total)) => {
                    row.push(group.clone());
                    *total += width;
                }
                None => rows.push((Row::from(group.clone()), width)),
            }
        }

        rows.into_iter().map(|(row, _)| row).collect()
    }
}
