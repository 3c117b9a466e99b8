//! Arrow-key navigation over the laid-out board.

use super::graph::ScrollGraph;
use super::projector::{project_tiles, project_tilesets};
use crate::config::AppConfig;
use crate::layout::{ContentCache, ContentKey, LayoutParams, Row};
use crate::model::{Direction, Tile, TileGroup};
use std::sync::Arc;
use tracing::{debug, trace};

/// The two graphs built from one snapshot.
///
/// Always built and replaced together.
#[derive(Debug, Clone, Default)]
pub struct NavigationGraphs {
    /// Tile-level graph, anchored on the rack.
    pub tiles: ScrollGraph<Tile>,
    /// Group-level graph, anchored on the virtual tileset.
    pub tilesets: ScrollGraph<TileGroup>,
}

impl NavigationGraphs {
    /// Build both graphs for rows given top row first.
    ///
    /// Rows are flipped to bottom-up order, then the rack is placed beneath
    /// them for the tile graph and the virtual tileset for the group graph.
    pub fn build(
        rows: &[Row],
        virtual_tileset: &TileGroup,
        rack: &TileGroup,
        width: u16,
        params: &LayoutParams,
    ) -> Self {
        let anchored = |anchor: &TileGroup| -> Vec<Row> {
            std::iter::once(Row::from(anchor.clone()))
                .chain(rows.iter().rev().cloned())
                .collect()
        };

        let tiles = ScrollGraph::build(&project_tiles(&anchored(rack), width, params));
        let tilesets =
            ScrollGraph::build(&project_tilesets(&anchored(virtual_tileset), width, params));

        Self { tiles, tilesets }
    }
}

/// Holds the live navigation graphs and answers arrow-key lookups.
///
/// Callers must call [`update_graphs`](Self::update_graphs) whenever the
/// board, rack, virtual tileset or width changes. Lookups against outdated
/// graphs return outdated answers; that is not detected here.
#[derive(Debug)]
pub struct ScrollNavigationService {
    params: LayoutParams,
    width: u16,
    graphs: Arc<NavigationGraphs>,
    cache: ContentCache<Arc<NavigationGraphs>>,
}

impl ScrollNavigationService {
    /// Create a service with empty graphs.
    pub fn new(width: u16, params: LayoutParams, cache_capacity: usize) -> Self {
        Self {
            params,
            width,
            graphs: Arc::new(NavigationGraphs::default()),
            cache: ContentCache::new(cache_capacity),
        }
    }

    /// Create from resolved configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.screen_width, config.layout, config.cache_capacity)
    }

    /// Rebuild both graphs for a new snapshot.
    ///
    /// `rows` are ordered top row first, as produced by
    /// [`BoardLayoutService::rows`](crate::layout::BoardLayoutService::rows).
    /// The new pair replaces the old one in a single swap, so holders of
    /// [`graphs`](Self::graphs) never see a partial rebuild.
    pub fn update_graphs(&mut self, rows: &[Row], virtual_tileset: &TileGroup, rack: &TileGroup) {
        let key = ContentKey::for_graphs(rows, virtual_tileset, rack, self.width, &self.params);

        if let Some(graphs) = self.cache.get(&key) {
            trace!(key = key.get(), "navigation cache hit");
            self.graphs = Arc::clone(graphs);
            return;
        }

        let graphs = Arc::new(NavigationGraphs::build(
            rows,
            virtual_tileset,
            rack,
            self.width,
            &self.params,
        ));

        debug!(
            key = key.get(),
            rows = rows.len(),
            tiles = graphs.tiles.len(),
            tilesets = graphs.tilesets.len(),
            "rebuilt navigation graphs"
        );

        self.cache.put(key, Arc::clone(&graphs));
        self.graphs = graphs;
    }

    /// Tile reached from `current` by pressing `direction`.
    ///
    /// `None` if `current` is not in the live graph or has no neighbor there.
    pub fn scroll_tile(&self, direction: Direction, current: Tile) -> Option<Tile> {
        let next = self.graphs.tiles.neighbor(&current, direction).copied();
        if next.is_none() && !self.graphs.tiles.contains(&current) {
            trace!(tile = current.id(), "scroll from tile not in graph");
        }
        next
    }

    /// Group reached from `current` by pressing `direction`.
    ///
    /// `None` if `current` is not in the live graph or has no neighbor there.
    pub fn scroll_tileset(&self, direction: Direction, current: &TileGroup) -> Option<TileGroup> {
        let next = self.graphs.tilesets.neighbor(current, direction).cloned();
        if next.is_none() && !self.graphs.tilesets.contains(current) {
            trace!(tileset = %current, "scroll from tileset not in graph");
        }
        next
    }

    /// Snapshot of the live graphs.
    pub fn graphs(&self) -> Arc<NavigationGraphs> {
        Arc::clone(&self.graphs)
    }

    /// Change the width used by the next [`update_graphs`](Self::update_graphs).
    pub fn resize(&mut self, width: u16) {
        self.width = width;
    }

    /// Current screen width.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of memoized graph pairs.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(ids: &[u16]) -> TileGroup {
        TileGroup::from_ids(ids.iter().copied()).expect("valid ids")
    }

    fn tile(id: u16) -> Tile {
        Tile::new(id).expect("valid tile id")
    }

    fn service(width: u16) -> ScrollNavigationService {
        ScrollNavigationService::new(width, LayoutParams::new(3, 2), 8)
    }

    /// Two board rows (top first) over a rack.
    ///
    /// At width 20:
    /// - top    `[10 11]`   width 8,  tiles at 6, 9
    /// - bottom `[20] [21]` width 10, tiles at 5, 10
    /// - rack   `[1 2 3]`   width 11, tiles at 4, 7, 10
    fn snapshot() -> (Vec<Row>, TileGroup, TileGroup) {
        let rows = vec![
            Row::from(group(&[10, 11])),
            Row::new(vec![group(&[20]), group(&[21])]),
        ];
        (rows, group(&[40]), group(&[1, 2, 3]))
    }

    #[test]
    fn starts_with_empty_graphs() {
        let s = service(20);
        assert!(s.graphs().tiles.is_empty());
        assert_eq!(s.scroll_tile(Direction::Up, tile(1)), None);
    }

    #[test]
    fn rack_is_the_tile_anchor() {
        let (rows, virt, rack) = snapshot();
        let mut s = service(20);
        s.update_graphs(&rows, &virt, &rack);

        assert_eq!(s.scroll_tile(Direction::Down, tile(1)), None);
        assert_eq!(s.scroll_tile(Direction::Right, tile(1)), Some(tile(2)));
        // rack 4 -> bottom row 5
        assert_eq!(s.scroll_tile(Direction::Up, tile(1)), Some(tile(20)));
        // rack 10 -> bottom row 10
        assert_eq!(s.scroll_tile(Direction::Up, tile(3)), Some(tile(21)));
    }

    #[test]
    fn rows_are_flipped_so_first_row_is_topmost() {
        let (rows, virt, rack) = snapshot();
        let mut s = service(20);
        s.update_graphs(&rows, &virt, &rack);

        // bottom 5 -> top 6
        assert_eq!(s.scroll_tile(Direction::Up, tile(20)), Some(tile(10)));
        assert_eq!(s.scroll_tile(Direction::Up, tile(10)), None);
        // top 9 -> bottom 10
        assert_eq!(s.scroll_tile(Direction::Down, tile(11)), Some(tile(21)));
    }

    #[test]
    fn virtual_tileset_is_the_group_anchor() {
        let (rows, virt, rack) = snapshot();
        let mut s = service(20);
        s.update_graphs(&rows, &virt, &rack);

        assert_eq!(s.scroll_tileset(Direction::Down, &virt), None);
        assert!(s.scroll_tileset(Direction::Up, &virt).is_some());
        assert_eq!(
            s.scroll_tileset(Direction::Right, &group(&[20])),
            Some(group(&[21]))
        );
        // The rack is not part of the group graph
        assert_eq!(s.scroll_tileset(Direction::Up, &rack), None);
    }

    #[test]
    fn stale_tile_yields_none() {
        let (rows, virt, rack) = snapshot();
        let mut s = service(20);
        s.update_graphs(&rows, &virt, &rack);
        assert_eq!(s.scroll_tile(Direction::Left, tile(99)), None);
    }

    #[test]
    fn repeated_update_reuses_cached_pair() {
        let (rows, virt, rack) = snapshot();
        let mut s = service(20);

        s.update_graphs(&rows, &virt, &rack);
        let first = s.graphs();
        s.update_graphs(&rows, &virt, &rack);
        let second = s.graphs();

        assert!(Arc::ptr_eq(&first, &second), "Unchanged input should reuse graphs");
        assert_eq!(s.cache_len(), 1);
    }

    #[test]
    fn update_swaps_whole_pair_and_old_snapshot_survives() {
        let (rows, virt, rack) = snapshot();
        let mut s = service(20);
        s.update_graphs(&rows, &virt, &rack);
        let before = s.graphs();

        let new_rack = group(&[5, 6]);
        s.update_graphs(&rows, &virt, &new_rack);

        assert!(!Arc::ptr_eq(&before, &s.graphs()));
        assert!(before.tiles.contains(&tile(1)), "Old snapshot is untouched");
        assert_eq!(s.scroll_tile(Direction::Right, tile(1)), None);
        assert_eq!(s.scroll_tile(Direction::Right, tile(5)), Some(tile(6)));
    }

    #[test]
    fn resize_changes_projection() {
        let rows = vec![Row::new(vec![group(&[20]), group(&[21])])];
        let rack = group(&[1]);
        let mut s = service(20);

        // width 20: rack tile at 7, row tiles at 5 and 10 -> 20 is closer
        s.update_graphs(&rows, &TileGroup::empty(), &rack);
        assert_eq!(s.scroll_tile(Direction::Up, tile(1)), Some(tile(20)));

        // width 21: rack tile at 8, row still floors to 5 and 10 -> 21 is closer
        s.resize(21);
        s.update_graphs(&rows, &TileGroup::empty(), &rack);
        assert_eq!(s.width(), 21);
        assert_eq!(s.scroll_tile(Direction::Up, tile(1)), Some(tile(21)));
        assert_eq!(s.cache_len(), 2);
    }
}
