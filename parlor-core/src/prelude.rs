pub use crate::poker::cards::{Card, CardView, Category, Deck, Hand, Rank, Suit, HAND_SIZE};
pub use crate::poker::error::Error as PokerError;
pub use crate::poker::scorer::HandScorer;
pub use crate::sudoku::error::Error as SudokuError;
pub use crate::sudoku::grid::{Cell, Digit, Grid};
pub use crate::sudoku::solver::{solve, solve_random, try_solve_random, DEFAULT_MAX_ATTEMPTS};
