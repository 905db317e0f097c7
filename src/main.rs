//! CLI entry point for the tile mosaic solver

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tilemosaic::io::cli::{Cli, FileProcessor};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    // A logger may already be installed when embedded
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
