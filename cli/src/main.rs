use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use sapper_core::{Board, ExactPlacement, Level, ScatterPlacement};

mod render;
mod session;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
enum LevelArg {
    VeryBeginner,
    Beginner,
    Advanced,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::VeryBeginner => Level::VeryBeginner,
            LevelArg::Beginner => Level::Beginner,
            LevelArg::Advanced => Level::Advanced,
        }
    }
}

/// Console minesweeper: clear the grid without stepping on a mine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty preset
    #[arg(value_enum, default_value = "beginner")]
    level: LevelArg,

    /// Fix the mine-placement seed instead of deriving one from the clock
    #[arg(long)]
    seed: Option<u64>,

    /// Place exactly the configured number of mines (no colliding draws)
    #[arg(long)]
    exact: bool,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .init();

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::debug!("placement seed: {seed}");

    let level = Level::from(cli.level);
    let mut board = Board::new(level.config());
    if cli.exact {
        board.initialize_with(ExactPlacement::new(seed));
    } else {
        board.initialize_with(ScatterPlacement::new(seed));
    }

    println!("minesweeper started, open every safe cell to win");
    session::run(board)
}

/// The engine takes whatever seed its host supplies; here that is the clock.
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
