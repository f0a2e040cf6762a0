use anyhow::{Context, Result};
use clap::Subcommand;
use rand::prelude::*;

use parlor_core::prelude::{solve, try_solve_random, Grid, DEFAULT_MAX_ATTEMPTS};

#[derive(Debug, Subcommand)]
pub enum CliCommands {
    /// Solve a grid given as 81 cells, '0' or '.' standing for empty
    Solve {
        /// The encoded grid, row by row
        grid: String,

        /// Use the randomized restart strategy instead of the deterministic search
        #[arg(long = "random", default_value = "false")]
        random: bool,

        /// Maximum restart attempts for the randomized strategy
        #[arg(long = "attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
        attempts: usize,

        /// Seed the randomized strategy for reproducible runs
        #[arg(long = "seed")]
        seed: Option<u64>,
    },
}

fn solve_grid(encoded: &str, random: bool, attempts: usize, seed: Option<u64>) -> Result<()> {
    let grid: Grid = encoded.parse().context("failed to parse grid")?;

    let solution = if random {
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        try_solve_random(&grid, &mut rng, attempts)
    } else {
        solve(&grid)
    };

    match solution {
        Some(solution) => print!("{solution}"),
        None => println!("no solution"),
    }

    Ok(())
}

pub fn run(command: &CliCommands) -> Result<()> {
    match command {
        CliCommands::Solve {
            grid,
            random,
            attempts,
            seed,
        } => solve_grid(grid, *random, *attempts, *seed),
    }
}
