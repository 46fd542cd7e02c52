//! CLI entry point for the placeholder artwork generator

use clap::Parser;
use placeholder_graphics::io::cli::{BatchRunner, Cli};

fn main() -> placeholder_graphics::Result<()> {
    let cli = Cli::parse();
    let mut runner = BatchRunner::new(&cli);
    runner.run()?;
    Ok(())
}
