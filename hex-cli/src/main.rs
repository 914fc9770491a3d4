//! Hex CLI - Command-line interface
//!
//! Commands:
//! - play: Play a game from the terminal or a move script

mod play_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use play_cmd::PlayArgs;

#[derive(Parser)]
#[command(name = "hex")]
#[command(about = "Hex connection game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (moves from stdin or a script file)
    Play(PlayArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the rendered board
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
    }
}
