//! Content-addressed LRU cache for layout and navigation results.
//!
//! Keys are structural hashes of the inputs, never object identity. The
//! contract every key constructor upholds:
//!
//! - identical tiles in identical order at identical width give the same key
//! - changing any input component gives a different key
//! - a board's key does not depend on the order its groups were inserted
//!
//! Hashing uses `FxHasher`, which is seeded identically in every process,
//! so keys are reproducible across runs.

use super::layout_params::LayoutParams;
use super::row::Row;
use crate::model::{Board, TileGroup};
use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::num::NonZeroUsize;

/// Capacity used when zero is requested.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Domain tags so a board key can never equal a graph key over the same bytes.
const BOARD_TAG: u8 = 0xB0;
const GRAPHS_TAG: u8 = 0x6A;
const VIRTUAL_TAG: u8 = 0x71;
const RACK_TAG: u8 = 0x7A;

/// Structural hash of a cache lookup's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentKey(u64);

impl ContentKey {
    /// Key for packing `board` into rows of `width` columns.
    ///
    /// Groups are folded with a commutative sum of their individual hashes,
    /// so the key is independent of iteration order.
    pub fn for_board(board: &Board, width: u16, params: &LayoutParams) -> Self {
        let folded = board
            .iter()
            .fold(0u64, |acc, group| acc.wrapping_add(mix(group_hash(group))));

        let mut hasher = FxHasher::default();
        hasher.write_u8(BOARD_TAG);
        hasher.write_u64(board.len() as u64);
        hasher.write_u64(folded);
        write_geometry(&mut hasher, width, params);
        Self(hasher.finish())
    }

    /// Key for the navigation graphs built from `rows` plus both anchors.
    ///
    /// Rows are ordered, so their order participates in the key.
    pub fn for_graphs(
        rows: &[Row],
        virtual_tileset: &TileGroup,
        rack: &TileGroup,
        width: u16,
        params: &LayoutParams,
    ) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u8(GRAPHS_TAG);
        hasher.write_u64(rows.len() as u64);
        for row in rows {
            hasher.write_u64(row.len() as u64);
            for group in row.groups() {
                hasher.write_u64(group_hash(group));
            }
        }
        hasher.write_u8(VIRTUAL_TAG);
        hasher.write_u64(group_hash(virtual_tileset));
        hasher.write_u8(RACK_TAG);
        hasher.write_u64(group_hash(rack));
        write_geometry(&mut hasher, width, params);
        Self(hasher.finish())
    }

    /// Raw hash value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Stable hash over a group's ordered tile ids.
pub fn group_hash(group: &TileGroup) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_u64(group.len() as u64);
    for tile in group.tiles() {
        hasher.write_u8(tile.id());
    }
    hasher.finish()
}

fn write_geometry(hasher: &mut FxHasher, width: u16, params: &LayoutParams) {
    hasher.write_u16(width);
    hasher.write_u16(params.tile_width);
    hasher.write_u16(params.group_padding);
}

/// splitmix64 finalizer; spreads bits before the commutative sum.
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Bounded memo table keyed by [`ContentKey`].
///
/// When full, inserting evicts the least recently used entry.
pub struct ContentCache<V> {
    cache: LruCache<ContentKey, V>,
}

impl<V> ContentCache<V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 uses [`DEFAULT_CACHE_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CACHE_CAPACITY
        } else {
            capacity
        };
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Look up a value, marking it most recently used.
    pub fn get(&mut self, key: &ContentKey) -> Option<&V> {
        self.cache.get(key)
    }

    /// Store a value, replacing any previous value for the key.
    pub fn put(&mut self, key: ContentKey, value: V) {
        self.cache.put(key, value);
    }

    /// Whether a key is present, without touching recency.
    pub fn contains(&self, key: &ContentKey) -> bool {
        self.cache.contains(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl<V> Default for ContentCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl<V> std::fmt::Debug for ContentCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}
