//! Directional adjacency graph over an irregular row layout.
//!
//! The layout is not a grid: rows hold different numbers of elements at
//! different columns. Horizontal moves stay within a row; vertical moves
//! jump to the element in the adjacent row whose projected column is
//! closest to the current one.
//!
//! # Asymmetry
//!
//! Up and down links are matched independently, so `a.top == b` does not
//! imply `b.bottom == a`. A wide element centered above three narrow ones
//! links down to the middle one, while all three narrow elements link up to
//! the wide one. Ties in distance resolve to the left candidate. Input
//! handling relies on this exact behavior.
//!
//! # Storage
//!
//! Nodes live in an arena in row-major order (anchor row first). Neighbor
//! links are [`NodeId`] indices into that arena, and an element-to-node side
//! table resolves lookups.

use super::projector::EdgeDistance;
use crate::model::Direction;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Index of a node in a [`ScrollGraph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// One navigable element and its four optional neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollGraphNode<T> {
    /// The element this node stands for.
    pub element: T,
    /// Nearest element in the row above.
    pub top: Option<NodeId>,
    /// Next element in the same row.
    pub right: Option<NodeId>,
    /// Nearest element in the row below.
    pub bottom: Option<NodeId>,
    /// Previous element in the same row.
    pub left: Option<NodeId>,
}

impl<T> ScrollGraphNode<T> {
    /// Neighbor link in `direction`.
    pub fn link(&self, direction: Direction) -> Option<NodeId> {
        match direction {
            Direction::Up => self.top,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Navigation graph for one granularity (tiles or tilesets).
#[derive(Debug, Clone)]
pub struct ScrollGraph<T> {
    nodes: Vec<ScrollGraphNode<T>>,
    index: FxHashMap<T, NodeId>,
}

impl<T> Default for ScrollGraph<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<T: Clone + Eq + Hash> ScrollGraph<T> {
    /// Build the graph from projected rows, anchor row (index 0) first and
    /// each following row one step higher on screen.
    ///
    /// Offsets within a row must be non-decreasing left to right, which the
    /// projector guarantees. If an element occurs more than once, lookups
    /// resolve to its last occurrence.
    pub fn build(matrix: &[Vec<EdgeDistance<T>>]) -> Self {
        let mut row_starts = Vec::with_capacity(matrix.len());
        let mut total = 0;
        for row in matrix {
            row_starts.push(total);
            total += row.len();
        }
        let id_at = |r: usize, c: usize| NodeId(row_starts[r] + c);

        let mut nodes = Vec::with_capacity(total);
        let mut index = FxHashMap::default();
        index.reserve(total);

        for (r, row) in matrix.iter().enumerate() {
            let below = r.checked_sub(1).map(|b| (b, &matrix[b]));
            let above = matrix.get(r + 1).map(|a| (r + 1, a));

            for (c, entry) in row.iter().enumerate() {
                let left = c.checked_sub(1).map(|lc| id_at(r, lc));
                let right = (c + 1 < row.len()).then(|| id_at(r, c + 1));
                let bottom = below
                    .and_then(|(b, cells)| take_closest(cells, entry.offset).map(|bc| id_at(b, bc)));
                let top = above
                    .and_then(|(a, cells)| take_closest(cells, entry.offset).map(|ac| id_at(a, ac)));

                index.insert(entry.element.clone(), id_at(r, c));
                nodes.push(ScrollGraphNode {
                    element: entry.element.clone(),
                    top,
                    right,
                    bottom,
                    left,
                });
            }
        }

        Self { nodes, index }
    }

    /// Node for `element`, if it is part of this graph.
    pub fn node(&self, element: &T) -> Option<&ScrollGraphNode<T>> {
        self.index.get(element).map(|id| &self.nodes[id.0])
    }

    /// Element reached from `element` by moving in `direction`.
    ///
    /// `None` when `element` is not in the graph or has no neighbor that way.
    pub fn neighbor(&self, element: &T, direction: Direction) -> Option<&T> {
        let id = self.node(element)?.link(direction)?;
        self.get(id).map(|node| &node.element)
    }

    /// Whether `element` has a node.
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }
}

impl<T> ScrollGraph<T> {
    /// Node by arena index.
    pub fn get(&self, id: NodeId) -> Option<&ScrollGraphNode<T>> {
        self.nodes.get(id.0)
    }

    /// All nodes, anchor row first.
    pub fn nodes(&self) -> &[ScrollGraphNode<T>] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Column in `row` whose offset is nearest to `query`.
///
/// Binary-searches for `pos`, the first entry with `offset >= query`:
/// - `pos == 0`: the leftmost entry
/// - `pos == len`: the rightmost entry
/// - otherwise the entry at `pos` wins only if strictly closer; ties go to
///   `pos - 1`
///
/// Returns `None` for an empty row.
pub fn take_closest<T>(row: &[EdgeDistance<T>], query: i32) -> Option<usize> {
    if row.is_empty() {
        return None;
    }

    let pos = row.partition_point(|entry| entry.offset < query);
    if pos == 0 {
        return Some(0);
    }
    if pos == row.len() {
        return Some(row.len() - 1);
    }

    let after = i64::from(row[pos].offset) - i64::from(query);
    let before = i64::from(query) - i64::from(row[pos - 1].offset);
    if after < before {
        Some(pos)
    } else {
        Some(pos - 1)
    }
}
