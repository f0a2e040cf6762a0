use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::Subcommand;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;
use strum::IntoEnumIterator;

use parlor_core::prelude::{Category, Deck, Hand, HandScorer};

#[derive(Debug, Subcommand)]
pub enum CliCommands {
    /// Score a 5-card hand given in shorthand, e.g. "AS KS QS JS TS"
    Score {
        /// Five space-separated card identifiers (rank then suit)
        cards: String,
    },
    /// Generate category frequencies for random 5-card draws
    Stats {
        /// Run on a single thread (for profiling)
        #[arg(long = "single-threaded", default_value = "false")]
        single_threaded: bool,

        /// Perform this many iterations, in tens of thousands
        #[arg(short = 'i', long = "iterations", default_value = "100")]
        iterations: usize,
    },
}

fn score(cards: &str) -> Result<()> {
    let hand: Hand = cards.parse().context("failed to parse hand")?;
    println!("{}", HandScorer::score_hand(&hand));
    Ok(())
}

fn generate_category_counts<G>(
    single_threaded: bool,
    iterations: usize,
    draw: G,
) -> HashMap<Category, usize>
where
    G: Fn() -> Category + std::marker::Sync,
{
    if single_threaded {
        (0..iterations)
            .map(|_| draw())
            .fold(HashMap::new(), |mut map, category| {
                *map.entry(category).or_insert(0) += 1;
                map
            })
    } else {
        (0..iterations)
            .into_par_iter()
            .map(|_| draw())
            .fold(HashMap::new, |mut map, category| {
                *map.entry(category).or_insert(0) += 1;
                map
            })
            .reduce(HashMap::new, |mut left, right| {
                for (category, count) in right {
                    *left.entry(category).or_insert(0) += count;
                }

                left
            })
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_category_stats(counts: HashMap<Category, usize>) {
    let total = counts.values().sum::<usize>() as f32;
    let category_columns = Category::iter()
        .map(|category| category.to_string().len())
        .max()
        .unwrap();

    for (category, count) in counts.into_iter().sorted_by_key(|(category, _)| *category) {
        println!(
            " - {:category_columns$} {:>8.4}%",
            category.to_string(),
            (count as f32) / total * 100.0,
        );
    }
}

#[allow(clippy::unnecessary_wraps)]
fn hand_stats(single_threaded: bool, iterations: usize) -> Result<()> {
    thread_local! {
        static RNG: RefCell<SmallRng> = RefCell::new(rand::rngs::SmallRng::from_entropy());
    }

    let draw = || {
        let mut deck = RNG.with_borrow_mut(Deck::shuffled);
        let hand = deck.draw_hand().unwrap();

        HandScorer::score_hand(&hand)
    };

    let counts = generate_category_counts(single_threaded, iterations, draw);

    println!("When drawing 5 cards from a shuffled 52-card standard deck, the frequencies of each category are:");
    print_category_stats(counts);

    Ok(())
}

pub fn run(command: &CliCommands) -> Result<()> {
    match command {
        CliCommands::Score { cards } => score(cards),
        CliCommands::Stats {
            single_threaded,
            iterations,
        } => hand_stats(*single_threaded, *iterations * 10_000),
    }
}
