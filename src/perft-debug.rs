use anyhow::bail;
use clap::Parser;

use chess_session::{utils::perf_test, GameSession};

/// Walks the move tree from the standard start and prints per-move node counts.
#[derive(Parser)]
#[command(name = "perft-debug")]
struct Args {
    /// Depth of the walk in plies
    #[arg(long, default_value = "2")]
    depth: usize,
    /// Leaf count the walk must reach
    #[arg(long)]
    expected: usize,
    /// Clone sessions instead of commit/undo on a single one
    #[arg(long)]
    copy: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let game = GameSession::new();
    if !perf_test(&game, args.depth, args.expected, true, !args.copy) {
        bail!("perft at depth {} doesn't match {}", args.depth, args.expected);
    }
    Ok(())
}
