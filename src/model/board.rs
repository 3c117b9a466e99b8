//! The set of groups currently played on the table.

use super::tile_group::TileGroup;
use std::collections::BTreeSet;

/// Unordered set of played groups.
///
/// Backed by an ordered set so iteration order is a pure function of the
/// board's content. Two boards built from the same groups in different
/// insertion orders iterate identically, which keeps packing consistent
/// with the order-independent cache key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    groups: BTreeSet<TileGroup>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group. Returns `false` if an identical group was already present.
    pub fn insert(&mut self, group: TileGroup) -> bool {
        self.groups.insert(group)
    }

    /// Remove a group. Returns `true` if it was present.
    pub fn remove(&mut self, group: &TileGroup) -> bool {
        self.groups.remove(group)
    }

    /// Whether the board holds this exact group.
    pub fn contains(&self, group: &TileGroup) -> bool {
        self.groups.contains(group)
    }

    /// Groups in stable content order.
    pub fn iter(&self) -> impl Iterator<Item = &TileGroup> {
        self.groups.iter()
    }

    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether nothing has been played.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<TileGroup> for Board {
    fn from_iter<I: IntoIterator<Item = TileGroup>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a TileGroup;
    type IntoIter = std::collections::btree_set::Iter<'a, TileGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
