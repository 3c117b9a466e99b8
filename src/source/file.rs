//! TOML board snapshot files.
//!
//! ```toml
//! rack = [1, 2, 3]
//! virtual = []
//! board = [[0, 1, 2], [52, 53, 54, 55]]
//! ```
//!
//! Every section is optional and defaults to empty. Ids are validated at
//! this boundary; duplicate board groups collapse into one.

use super::BoardSnapshot;
use crate::model::error::SnapshotError;
use crate::model::{Board, TileGroup};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotFile {
    #[serde(default)]
    rack: Vec<u16>,
    #[serde(default, rename = "virtual")]
    virtual_tileset: Vec<u16>,
    #[serde(default)]
    board: Vec<Vec<u16>>,
}

/// Load and validate a snapshot file.
///
/// # Errors
///
/// - `SnapshotError::FileNotFound` if `path` does not exist
/// - `SnapshotError::Parse` for malformed TOML or unknown keys
/// - `SnapshotError::InvalidTile` for ids outside `0..=105`
pub fn load_snapshot(path: &Path) -> Result<BoardSnapshot, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&contents).map_err(|err| match err {
        SnapshotError::Parse { reason, .. } => SnapshotError::Parse {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })?;

    debug!(
        path = %path.display(),
        groups = snapshot.board.len(),
        rack = snapshot.rack.len(),
        "loaded board snapshot"
    );
    Ok(snapshot)
}

/// Parse snapshot TOML held in memory.
///
/// Parse errors carry an empty path; [`load_snapshot`] fills it in.
///
/// # Errors
///
/// Same as [`load_snapshot`], minus `FileNotFound`.
pub fn parse_snapshot(contents: &str) -> Result<BoardSnapshot, SnapshotError> {
    let raw: SnapshotFile = toml::from_str(contents).map_err(|e| SnapshotError::Parse {
        path: Default::default(),
        reason: e.to_string(),
    })?;

    let group = |section: String, ids: Vec<u16>| {
        TileGroup::from_ids(ids).map_err(|source| SnapshotError::InvalidTile { section, source })
    };

    let rack = group("rack".to_string(), raw.rack)?;
    let virtual_tileset = group("virtual".to_string(), raw.virtual_tileset)?;
    let board = raw
        .board
        .into_iter()
        .enumerate()
        .map(|(i, ids)| group(format!("board[{}]", i), ids))
        .collect::<Result<Board, _>>()?;

    Ok(BoardSnapshot {
        board,
        rack,
        virtual_tileset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvalidTileId;
    use std::fs;
    use std::path::PathBuf;

    fn group(ids: &[u16]) -> TileGroup {
        TileGroup::from_ids(ids.iter().copied()).expect("valid ids")
    }

    #[test]
    fn parses_all_sections() {
        let snapshot = parse_snapshot(
            r#"
rack = [1, 2, 3]
virtual = [40]
board = [[0, 1, 2], [52, 53, 54, 55]]
"#,
        )
        .expect("valid snapshot");

        assert_eq!(snapshot.rack, group(&[1, 2, 3]));
        assert_eq!(snapshot.virtual_tileset, group(&[40]));
        assert_eq!(snapshot.board.len(), 2);
        assert!(snapshot.board.contains(&group(&[52, 53, 54, 55])));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let snapshot = parse_snapshot("").expect("empty snapshot is valid");
        assert!(snapshot.board.is_empty());
        assert!(snapshot.rack.is_empty());
        assert!(snapshot.virtual_tileset.is_empty());
    }

    #[test]
    fn duplicate_groups_collapse() {
        let snapshot = parse_snapshot("board = [[1, 2, 3], [1, 2, 3]]").expect("valid snapshot");
        assert_eq!(snapshot.board.len(), 1);
    }

    #[test]
    fn out_of_range_id_names_the_board_group() {
        let result = parse_snapshot("board = [[1, 2, 3], [4, 106]]");
        match result {
            Err(SnapshotError::InvalidTile { section, source }) => {
                assert_eq!(section, "board[1]");
                assert_eq!(source, InvalidTileId(106));
            }
            other => panic!("Expected InvalidTile, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_rack_id_is_rejected() {
        let result = parse_snapshot("rack = [200]");
        assert!(matches!(
            result,
            Err(SnapshotError::InvalidTile { ref section, .. }) if section == "rack"
        ));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let result = parse_snapshot("players = 4");
        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = PathBuf::from("/nonexistent/rummi_board_snapshot.toml");
        match load_snapshot(&path) {
            Err(SnapshotError::FileNotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn load_parse_error_carries_file_path() {
        let path = std::env::temp_dir().join("rummi_board_bad_snapshot.toml");
        fs::write(&path, "board = [[1, 2").expect("write snapshot");

        match load_snapshot(&path) {
            Err(SnapshotError::Parse { path: bad, .. }) => assert_eq!(bad, path),
            other => panic!("Expected Parse, got {:?}", other),
        }

        fs::remove_file(path).ok();
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join("rummi_board_good_snapshot.toml");
        fs::write(&path, "rack = [5]\nboard = [[7, 8, 9]]").expect("write snapshot");

        let snapshot = load_snapshot(&path).expect("valid snapshot");
        assert_eq!(snapshot.rack, group(&[5]));
        assert!(snapshot.board.contains(&group(&[7, 8, 9])));

        fs::remove_file(path).ok();
    }
}
