//! Snapshot tests for the plain-text layout and walk reports.

use rummi_board::layout::{BoardLayoutService, LayoutParams};
use rummi_board::model::{Direction, Tile};
use rummi_board::navigation::ScrollNavigationService;
use rummi_board::report::{format_rows, format_steps, replay};
use rummi_board::source::{parse_snapshot, BoardSnapshot};

const WIDTH: u16 = 30;

const SNAPSHOT: &str = r#"
rack = [20, 21]
virtual = []
board = [[0, 1, 2, 3], [17, 30, 43], [60, 61, 62], [104, 5, 6]]
"#;

fn setup() -> (BoardSnapshot, ScrollNavigationService, String) {
    let snapshot = parse_snapshot(SNAPSHOT).expect("valid snapshot");
    let params = LayoutParams::default();

    let mut layout = BoardLayoutService::new(WIDTH, params, 4);
    let rows = layout.rows(&snapshot.board);

    let mut nav = ScrollNavigationService::new(WIDTH, params, 4);
    nav.update_graphs(&rows, &snapshot.virtual_tileset, &snapshot.rack);

    let text = format_rows(&rows, WIDTH, &params);
    (snapshot, nav, text)
}

fn moves(list: &str) -> Vec<Direction> {
    list.split(',')
        .map(|m| m.parse().expect("valid direction"))
        .collect()
}

#[test]
fn rows_at_width_30() {
    let (_, _, text) = setup();
    insta::assert_snapshot!(text, @r"
    row  1  w=25  x=2   [1K 2K 3K 4K] [5R 5B 5O]
    row  2  w=22  x=4   [9K 10K 11K] [J 6K 7K]
    ");
}

#[test]
fn tile_walk_from_rack() {
    let (_, nav, _) = setup();
    let start = Tile::new(20).expect("valid tile id");
    let steps = replay(start, &moves("up,up,right,right,down,left,down,down"), |d, t| {
        nav.scroll_tile(d, *t)
    });

    insta::assert_snapshot!(format_steps(&steps), @r"
    up     -> 11K
    up     -> 4K
    right  -> 5R
    right  -> 5B
    down   -> 6K
    left   -> J
    down   -> 9R
    down   -- 9R (blocked)
    ");
}

#[test]
fn tileset_walk_from_virtual() {
    let (snapshot, nav, _) = setup();
    let steps = replay(
        snapshot.virtual_tileset.clone(),
        &moves("up,up,down,left,down"),
        |d, g| nav.scroll_tileset(d, g),
    );

    insta::assert_snapshot!(format_steps(&steps), @r"
    up     -> [J 6K 7K]
    up     -> [5R 5B 5O]
    down   -> [J 6K 7K]
    left   -> [9K 10K 11K]
    down   -> []
    ");
}
