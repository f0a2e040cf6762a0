use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::sudoku::digitset::DigitSet;
use crate::sudoku::error::{Error, Result};

pub const GRID_SIZE: usize = 9;
pub const BOX_SIZE: usize = 3;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
#[repr(u8)]
pub enum Digit {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl Digit {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::iter().find(|digit| *digit as u8 == value)
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

pub type Cell = Option<Digit>;

/// A 9x9 sudoku grid. `Copy`, so every trial assignment during search is its
/// own snapshot and backtracking is just dropping a failed branch.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from raw cell values, 0 standing for an empty cell.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        let mut grid = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if value > 0 {
                    let digit = Digit::from_u8(value).ok_or(Error::BadCellValue(value))?;
                    grid.cells[row][column] = Some(digit);
                }
            }
        }
        Ok(grid)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Copy of this grid with one cell assigned.
    pub fn with(&self, row: usize, column: usize, digit: Digit) -> Self {
        let mut trial = *self;
        trial.cells[row][column] = Some(digit);
        trial
    }

    /// First empty cell in row-major order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |column| (row, column)))
            .find(|&(row, column)| self.cells[row][column].is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells[row].iter().copied()
    }

    fn column(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |row| row[column])
    }

    fn box_cells(&self, index: usize) -> impl Iterator<Item = Cell> + '_ {
        let base_row = index / BOX_SIZE * BOX_SIZE;
        let base_column = index % BOX_SIZE * BOX_SIZE;
        (base_row..base_row + BOX_SIZE).flat_map(move |row| {
            (base_column..base_column + BOX_SIZE).map(move |column| self.cells[row][column])
        })
    }

    /// No row, column, or box holds a repeated digit. Empty cells are skipped.
    pub fn is_valid(&self) -> bool {
        (0..GRID_SIZE).all(|index| {
            Self::no_duplicates(self.row(index))
                && Self::no_duplicates(self.column(index))
                && Self::no_duplicates(self.box_cells(index))
        })
    }

    fn no_duplicates(cells: impl Iterator<Item = Cell>) -> bool {
        let mut seen = DigitSet::empty();
        for digit in cells.flatten() {
            if seen.contains(digit) {
                return false;
            }
            seen.insert(digit);
        }
        true
    }
}

impl std::str::FromStr for Grid {
    type Err = Error;

    /// Parse 81 cells written as `1`-`9`, with `0` or `.` for an empty cell.
    /// Whitespace is ignored, so encodings may be wrapped into rows.
    fn from_str(encoded: &str) -> Result<Self> {
        let cells = encoded
            .chars()
            .filter(|character| !character.is_whitespace())
            .map(|character| match character {
                '.' | '0' => Ok(None),
                '1'..='9' => Ok(Digit::from_u8(character as u8 - b'0')),
                _ => Err(Error::BadCellChar(character)),
            })
            .collect::<Result<Vec<Cell>>>()?;

        if cells.len() != GRID_SIZE * GRID_SIZE {
            return Err(Error::WrongGridSize(cells.len()));
        }

        let mut grid = Self::empty();
        for (index, cell) in cells.into_iter().enumerate() {
            grid.cells[index / GRID_SIZE][index % GRID_SIZE] = cell;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (column, cell) in cells.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                    if column % BOX_SIZE == 0 {
                        write!(f, "| ")?;
                    }
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_test() {
        let grid = Grid::empty();
        assert!(grid.is_valid());
        assert!(!grid.is_complete());
        assert_eq!(grid.first_empty(), Some((0, 0)));
    }

    #[test]
    fn from_rows_test() {
        let mut rows = [[0_u8; GRID_SIZE]; GRID_SIZE];
        rows[3][7] = 4;
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.get(3, 7), Some(Digit::Four));
        assert_eq!(grid.get(0, 0), None);

        rows[0][0] = 12;
        assert!(matches!(Grid::from_rows(rows), Err(Error::BadCellValue(12))));
    }

    #[test]
    fn parse_test() {
        let encoded = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid: Grid = encoded.parse().unwrap();
        assert_eq!(grid.get(0, 0), Some(Digit::Five));
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(8, 8), Some(Digit::Nine));
        assert!(grid.is_valid());

        assert!(matches!(
            "123".parse::<Grid>(),
            Err(Error::WrongGridSize(3))
        ));
        assert!(matches!(
            encoded.replace('5', "x").parse::<Grid>(),
            Err(Error::BadCellChar('x'))
        ));
    }

    #[test]
    fn first_empty_is_row_major_test() {
        let mut rows = [[1_u8; GRID_SIZE]; GRID_SIZE];
        rows[2][5] = 0;
        rows[6][1] = 0;
        // Validity is irrelevant to the scan order.
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.first_empty(), Some((2, 5)));
    }

    #[test]
    fn duplicate_detection_test() {
        let row_dup = Grid::empty().with(0, 0, Digit::Seven).with(0, 8, Digit::Seven);
        assert!(!row_dup.is_valid());

        let column_dup = Grid::empty().with(0, 3, Digit::Two).with(8, 3, Digit::Two);
        assert!(!column_dup.is_valid());

        let box_dup = Grid::empty().with(0, 0, Digit::One).with(1, 1, Digit::One);
        assert!(!box_dup.is_valid());
    }

    #[test]
    fn display_parse_roundtrip_test() {
        let encoded = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid: Grid = encoded.parse().unwrap();
        // Display output parses back to the same grid ('.' and '|' aside).
        let rendered = grid
            .to_string()
            .chars()
            .filter(|c| matches!(c, '.' | '0'..='9'))
            .collect::<String>();
        assert_eq!(rendered.parse::<Grid>().unwrap(), grid);
    }
}
