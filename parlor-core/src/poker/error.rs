use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a hand must contain exactly 5 cards, got {0}")]
    WrongHandSize(usize),
    #[error("card shorthand must be two characters, got {0:?}")]
    BadCardIdent(String),
    #[error("unknown rank character {0:?}")]
    UnknownRank(char),
    #[error("unknown suit character {0:?}")]
    UnknownSuit(char),
}

pub type Result<T> = std::result::Result<T, Error>;
