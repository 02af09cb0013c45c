#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{Difficulty, GameSession, GameState, LogSink, MineGenerator, RandomMineGenerator};

use crate::sink::JsonLinesSink;
use crate::terminal::Terminal;

mod game;
mod input;
mod logging;
mod render;
mod sink;
mod terminal;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// Board tier: 1 (beginner, 9x9), 2 (intermediate, 16x16) or 3 (expert, 22x22)
    #[arg(short, long)]
    difficulty: Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// File that receives log output
    #[arg(long, default_value = "sweeper.log")]
    log_file: PathBuf,

    /// Append cell snapshots (key `l`) to this file as JSON lines instead of the log
    #[arg(long)]
    diagnostics: Option<PathBuf>,

    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_file, args.verbose.log_level_filter())?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting {} game, seed {}", args.difficulty, seed);

    let board = RandomMineGenerator::new(seed)
        .generate(args.difficulty.config())
        .context("Could not build board")?;
    let session = GameSession::new(board);
    let mut session = match &args.diagnostics {
        Some(path) => {
            let sink = JsonLinesSink::append(path)
                .with_context(|| format!("Could not open diagnostics file {}", path.display()))?;
            session.with_diagnostics(sink)
        }
        None => session.with_diagnostics(LogSink),
    };

    let state = {
        let mut terminal = Terminal::enter().context("Could not set up terminal")?;
        game::run(terminal.out(), &mut session, args.difficulty)?
    };

    log::info!("Game finished: {:?}", state);
    match state {
        GameState::Won => println!("Board cleared, well done."),
        GameState::Lost => println!("Game over."),
        GameState::Ready | GameState::Active => println!("Quit."),
    }
    Ok(())
}
