//! rummi-board - lay out a board snapshot and replay arrow-key moves

use clap::Parser;
use rummi_board::config::{self, AppConfig};
use rummi_board::layout::BoardLayoutService;
use rummi_board::model::{AppError, Direction, Tile};
use rummi_board::navigation::ScrollNavigationService;
use rummi_board::report::{format_rows, format_steps, replay};
use rummi_board::{logging, source};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Lay out a board snapshot and replay arrow-key moves over it
#[derive(Parser, Debug)]
#[command(name = "rummi-board")]
#[command(version)]
#[command(about = "Lay out a board snapshot and replay arrow-key moves over it")]
pub struct Args {
    /// Path to a TOML board snapshot
    pub file: PathBuf,

    /// Screen width in columns (overrides config and RUMMI_BOARD_WIDTH)
    #[arg(short, long)]
    pub width: Option<u16>,

    /// Comma-separated moves, e.g. up,up,left
    #[arg(short, long, value_delimiter = ',')]
    pub moves: Vec<Direction>,

    /// Navigate whole groups instead of single tiles
    #[arg(long)]
    pub tilesets: bool,

    /// Tile id to start from (defaults to the first rack tile)
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=105))]
    pub start_tile: Option<u16>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let found_file = config_file.is_some();
    let resolved = {
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.width)
    };

    let filter = if args.verbose { "debug" } else { logging::DEFAULT_FILTER };
    logging::init(&resolved.log_file_path, filter)?;

    // Resolution ran before the subscriber existed
    if !found_file {
        debug!("no config file found, using defaults");
    }
    for warning in &resolved.warnings {
        warn!("{}", warning);
    }
    info!(config = ?resolved, "Configuration loaded and resolved");

    let app_config = AppConfig::from(&resolved);
    let snapshot = source::load_snapshot(&args.file)?;

    let mut layout = BoardLayoutService::from_config(&app_config);
    let rows = layout.rows(&snapshot.board);

    let mut navigation = ScrollNavigationService::from_config(&app_config);
    navigation.update_graphs(&rows, &snapshot.virtual_tileset, &snapshot.rack);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(
        out,
        "{}",
        format_rows(&rows, app_config.screen_width, &app_config.layout)
    )?;
    writeln!(out, "rack     {}", snapshot.rack)?;
    writeln!(out, "virtual  {}", snapshot.virtual_tileset)?;

    if args.moves.is_empty() {
        return Ok(());
    }
    writeln!(out)?;

    if args.tilesets {
        let steps = replay(snapshot.virtual_tileset.clone(), &args.moves, |d, g| {
            navigation.scroll_tileset(d, g)
        });
        write!(out, "{}", format_steps(&steps))?;
    } else {
        let start = match args.start_tile {
            Some(id) => Tile::new(id).map_err(|e| AppError::InvalidArgument(e.to_string()))?,
            None => snapshot.rack.tiles().first().copied().ok_or_else(|| {
                AppError::InvalidArgument("rack is empty; pass --start-tile".to_string())
            })?,
        };
        let steps = replay(start, &args.moves, |d, t| navigation.scroll_tile(d, *t));
        write!(out, "{}", format_steps(&steps))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["rummi-board", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["rummi-board", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_file_is_required() {
        assert!(Args::try_parse_from(["rummi-board"]).is_err());
    }

    #[test]
    fn test_moves_parse_comma_separated() {
        let args = Args::try_parse_from(["rummi-board", "board.toml", "--moves", "up,left,down"])
            .expect("valid args");
        assert_eq!(
            args.moves,
            vec![Direction::Up, Direction::Left, Direction::Down]
        );
    }

    #[test]
    fn test_moves_accept_vim_keys() {
        let args = Args::try_parse_from(["rummi-board", "board.toml", "--moves", "k,l,j,h"])
            .expect("valid args");
        assert_eq!(
            args.moves,
            vec![Direction::Up, Direction::Right, Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn test_unknown_move_is_rejected() {
        let result = Args::try_parse_from(["rummi-board", "board.toml", "--moves", "up,sideways"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_start_tile_range_is_checked() {
        assert!(Args::try_parse_from(["rummi-board", "b.toml", "--start-tile", "105"]).is_ok());
        assert!(Args::try_parse_from(["rummi-board", "b.toml", "--start-tile", "106"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["rummi-board", "b.toml"]).expect("valid args");
        assert_eq!(args.width, None);
        assert!(args.moves.is_empty());
        assert!(!args.tilesets);
        assert!(!args.verbose);
    }
}
