//! Tarati command-line interface
//!
//! Positions are read and written in the persisted JSON form. Every
//! command that takes a position reads it from a file, or from stdin when
//! the path is `-`, and falls back to the initial layout.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use tarati::board::topology::row;
use tarati::rules::{legal_moves, legal_moves_from, try_apply_move};
use tarati::{AIEngine, Color, EngineConfig, Game, Position, Vertex};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Search depth in plies (overrides --difficulty)
    #[arg(long, global = true)]
    depth: Option<u8>,

    /// Preset search depth
    #[arg(long, value_enum, default_value_t = Difficulty::Easy, global = true)]
    difficulty: Difficulty,

    /// Transposition table size in MB (0 disables it)
    #[arg(long = "tt-mb", default_value_t = 16, global = true)]
    tt_mb: usize,

    /// Split root moves across threads
    #[arg(long, global = true)]
    parallel: bool,

    /// Keep the transposition table between moves
    #[arg(long, global = true)]
    keep_cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial position
    New,
    /// Draw a position
    Show { position: Option<PathBuf> },
    /// List legal moves
    Moves {
        position: Option<PathBuf>,
        /// Only moves of the checker on this vertex
        #[arg(long)]
        from: Option<Vertex>,
    },
    /// Apply one move and print the resulting position
    Play {
        from: Vertex,
        to: Vertex,
        position: Option<PathBuf>,
    },
    /// Ask the engine for a move
    Best { position: Option<PathBuf> },
    /// Let the engine play both sides until the game ends
    Selfplay {
        position: Option<PathBuf>,
        /// Stop after this many plies
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 6,
            Difficulty::Hard => 12,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = EngineConfig {
        max_depth: args.depth.unwrap_or_else(|| args.difficulty.depth()),
        tt_size_mb: args.tt_mb,
        keep_cache: args.keep_cache,
        parallel: args.parallel,
    };
    log::debug!("{config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::New => Position::initial().write_json(&mut out)?,
        Command::Show { position } => {
            let pos = load_position(position.as_deref())?;
            write!(out, "{}", render(&pos))?;
        }
        Command::Moves { position, from } => {
            let pos = load_position(position.as_deref())?;
            let moves = match from {
                Some(v) => legal_moves_from(&pos, v),
                None => legal_moves(&pos),
            };
            for mv in moves {
                writeln!(out, "{mv}")?;
            }
        }
        Command::Play { from, to, position } => {
            let pos = load_position(position.as_deref())?;
            let Some(next) = try_apply_move(&pos, from, to) else {
                bail!("illegal move {from}-{to} for {}", pos.side_to_move());
            };
            next.write_json(&mut out)?;
        }
        Command::Best { position } => {
            let pos = load_position(position.as_deref())?;
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&pos);
            match result.best_move {
                Some(mv) => writeln!(out, "{mv}")?,
                None => writeln!(out, "none")?,
            }
            log::info!(
                "score {} via {:?} at depth {}, {} nodes in {}ms",
                result.score,
                result.search_type,
                result.depth,
                result.nodes,
                result.time_ms
            );
        }
        Command::Selfplay { position, max_plies } => {
            let pos = load_position(position.as_deref())?;
            let mut engine = AIEngine::with_config(config);
            let mut game = Game::from_position(pos);

            while game.ply() < max_plies && !game.is_over() {
                let mover = game.current().side_to_move();
                let Some(mv) = engine.get_move(game.current()) else {
                    break;
                };
                game.play_move(mv)?;
                writeln!(out, "{:>3}. {mover} {mv}", game.ply())?;
            }

            write!(out, "{}", render(game.current()))?;
            match game.winner() {
                Some(color) => writeln!(out, "{color} wins after {} plies", game.ply())?,
                None => writeln!(out, "no result after {} plies", game.ply())?,
            }
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .target(env_logger::Target::Stderr)
    .init();
}

/// Read a position from `path` (`-` = stdin), or the initial layout
fn load_position(path: Option<&Path>) -> Result<Position> {
    match path {
        None => Ok(Position::initial()),
        Some(p) if p == Path::new("-") => {
            Position::read_json(io::stdin().lock()).context("reading position from stdin")
        }
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            Position::read_json(BufReader::new(file))
                .with_context(|| format!("reading position from {}", p.display()))
        }
    }
}

/// Board listing by row, Black's home edge on top.
///
/// `w`/`b` mark plain checkers, `W`/`B` upgraded ones.
fn render(pos: &Position) -> String {
    let mut text = String::new();
    for r in (0..=10u8).rev() {
        let cells: Vec<String> = Vertex::all()
            .filter(|&v| row(v) == r)
            .map(|v| {
                let mark = match pos.get(v) {
                    None => '.',
                    Some(c) => match (c.color, c.upgraded) {
                        (Color::White, false) => 'w',
                        (Color::White, true) => 'W',
                        (Color::Black, false) => 'b',
                        (Color::Black, true) => 'B',
                    },
                };
                format!("{v:>3} {mark}")
            })
            .collect();
        text.push_str(&format!("{r:>2} |{}\n", cells.join(" ")));
    }
    text.push_str(&format!("{} to move\n", pos.side_to_move()));
    text
}
