//! Plain-text dumps of a layout and a highlight walk.
//!
//! Used by the binary and by snapshot tests. This is diagnostic output,
//! not a renderer: no colors, no borders, no cursor control.

use crate::layout::{LayoutParams, Row};
use crate::model::Direction;
use crate::navigation::leftmost_offset;
use std::fmt::{Display, Write};

/// One arrow press in a replayed walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    /// Key pressed.
    pub direction: Direction,
    /// Highlight after the press.
    pub highlight: T,
    /// Whether the press moved the highlight.
    pub moved: bool,
}

/// Press each of `moves` in turn, starting from `start`.
///
/// A press with no neighbor leaves the highlight where it was.
pub fn replay<T, F>(start: T, moves: &[Direction], mut scroll: F) -> Vec<Step<T>>
where
    T: Clone,
    F: FnMut(Direction, &T) -> Option<T>,
{
    let mut current = start;
    moves
        .iter()
        .map(|&direction| {
            let next = scroll(direction, &current);
            let moved = next.is_some();
            if let Some(next) = next {
                current = next;
            }
            Step {
                direction,
                highlight: current.clone(),
                moved,
            }
        })
        .collect()
}

/// One line per row, top row first, with width and leftmost column.
pub fn format_rows(rows: &[Row], width: u16, params: &LayoutParams) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let row_width = row.width(params);
        let groups: Vec<String> = row.groups().iter().map(|g| g.to_string()).collect();
        let _ = writeln!(
            out,
            "row {:>2}  w={:<3} x={:<3} {}",
            i + 1,
            row_width,
            leftmost_offset(width, row_width),
            groups.join(" ")
        );
    }
    out
}

/// One line per step: `up     -> 7R` or `left   -- 7R (blocked)`.
pub fn format_steps<T: Display>(steps: &[Step<T>]) -> String {
    let mut out = String::new();
    for step in steps {
        let (arrow, note) = if step.moved { ("->", "") } else { ("--", " (blocked)") };
        let _ = writeln!(
            out,
            "{:<6} {} {}{}",
            step.direction.to_string(),
            arrow,
            step.highlight,
            note
        );
    }
    out
}
