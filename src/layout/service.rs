//! Memoized board-to-rows layout.

use super::cache::{ContentCache, ContentKey};
use super::layout_params::LayoutParams;
use super::packer::{FirstFitPacker, RowPacker};
use super::row::Row;
use crate::config::AppConfig;
use crate::model::Board;
use std::sync::Arc;
use tracing::{debug, trace};

/// Packed rows, shared between the cache and callers.
pub type Rows = Arc<[Row]>;

/// Lays the board out into rows for the current screen width.
///
/// Packing runs every frame in the host's render loop, so results are
/// memoized by board content, width and cell geometry.
#[derive(Debug)]
pub struct BoardLayoutService<P = FirstFitPacker> {
    packer: P,
    params: LayoutParams,
    width: u16,
    cache: ContentCache<Rows>,
}

impl BoardLayoutService<FirstFitPacker> {
    /// Create a service with the first-fit packer.
    pub fn new(width: u16, params: LayoutParams, cache_capacity: usize) -> Self {
        Self::with_packer(FirstFitPacker, width, params, cache_capacity)
    }

    /// Create from resolved configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.screen_width, config.layout, config.cache_capacity)
    }
}

impl<P: RowPacker> BoardLayoutService<P> {
    /// Create a service with a custom packer.
    pub fn with_packer(packer: P, width: u16, params: LayoutParams, cache_capacity: usize) -> Self {
        Self {
            packer,
            params,
            width,
            cache: ContentCache::new(cache_capacity),
        }
    }

    /// Rows for `board` at the current width, top row first.
    ///
    /// Returns the cached value when board content and width are unchanged.
    /// Width 0 degenerates to one group per row.
    pub fn rows(&mut self, board: &Board) -> Rows {
        let key = ContentKey::for_board(board, self.width, &self.params);

        if let Some(rows) = self.cache.get(&key) {
            trace!(key = key.get(), rows = rows.len(), "layout cache hit");
            return Arc::clone(rows);
        }

        let rows: Rows = self
            .packer
            .pack(board.iter(), u32::from(self.width), &self.params)
            .into();

        debug!(
            key = key.get(),
            groups = board.len(),
            rows = rows.len(),
            width = self.width,
            "packed board into rows"
        );

        self.cache.put(key, Arc::clone(&rows));
        rows
    }

    /// Change the screen width used for subsequent layouts.
    pub fn resize(&mut self, width: u16) {
        if width != self.width {
            debug!(from = self.width, to = width, "layout width changed");
            self.width = width;
        }
    }

    /// Current screen width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Cell geometry.
    pub fn params(&self) -> LayoutParams {
        self.params
    }

    /// Number of memoized layouts.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// The packer in use.
    pub fn packer(&self) -> &P {
        &self.packer
    }
}
