//! CLI entry point for playing unattended sliding-tile merge games

use clap::Parser;
use env_logger::Env;
use tilemerge::io::cli::{Cli, GameRunner};

fn main() -> tilemerge::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut runner = GameRunner::new(cli);
    runner.run()?;
    Ok(())
}
