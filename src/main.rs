//! Checkers text front-end

use std::io;
use std::time::Duration;

use checkers::engine::search::SearchLimits;
use checkers::{GameMode, Session};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeOpt {
    Computer,
    TwoPlayer,
}

impl From<ModeOpt> for GameMode {
    fn from(mode: ModeOpt) -> Self {
        match mode {
            ModeOpt::Computer => GameMode::Computer,
            ModeOpt::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "checkers", about = "Checkers against a friend or the computer")]
struct Args {
    /// Who plays black: the computer or a second human
    #[arg(long, value_enum, default_value_t = ModeOpt::TwoPlayer)]
    mode: ModeOpt,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, default_value_t = 500)]
    think_ms: u64,

    /// Search depth below each candidate move
    #[arg(long, default_value_t = checkers::engine::search::DEFAULT_DEPTH)]
    depth: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    println!("Checkers - type 'help' for commands, 'quit' to exit");

    let mut session = Session::new(args.mode.into())
        .with_limits(SearchLimits { depth: args.depth })
        .with_think_delay(Duration::from_millis(args.think_ms));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
