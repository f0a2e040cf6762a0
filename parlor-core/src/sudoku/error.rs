use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a grid encoding must contain exactly 81 cells, got {0}")]
    WrongGridSize(usize),
    #[error("cell value must be 0 (empty) or 1-9, got {0}")]
    BadCellValue(u8),
    #[error("unknown cell character {0:?}")]
    BadCellChar(char),
}

pub type Result<T> = std::result::Result<T, Error>;
