//! One packed row of groups.

use super::layout_params::LayoutParams;
use crate::model::TileGroup;

/// Left-to-right run of groups whose combined width fits the screen.
///
/// Rows are recomputed whenever the board or width changes and are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Row {
    groups: Vec<TileGroup>,
}

impl Row {
    /// Create a row from groups in display order.
    pub fn new(groups: Vec<TileGroup>) -> Self {
        Self { groups }
    }

    /// Groups in display order.
    pub fn groups(&self) -> &[TileGroup] {
        &self.groups
    }

    /// Append a group at the right end.
    pub fn push(&mut self, group: TileGroup) {
        self.groups.push(group);
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the row has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of group widths.
    pub fn width(&self, params: &LayoutParams) -> u32 {
        self.groups.iter().map(|g| g.width(params)).sum()
    }
}

impl From<Vec<TileGroup>> for Row {
    fn from(groups: Vec<TileGroup>) -> Self {
        Self::new(groups)
    }
}

impl From<TileGroup> for Row {
    /// A single-group row, used for the navigation anchor.
    fn from(group: TileGroup) -> Self {
        Self::new(vec![group])
    }
}
