mod poker;
mod sudoku;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    /// Score poker hands
    Poker {
        #[command(subcommand)]
        command: poker::CliCommands,
    },
    /// Solve sudoku grids
    Sudoku {
        #[command(subcommand)]
        command: sudoku::CliCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        CliCommands::Poker { command } => poker::run(command),
        CliCommands::Sudoku { command } => sudoku::run(command),
    }
}
