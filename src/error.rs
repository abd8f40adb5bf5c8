use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{what} {value} is out of range, expected {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("length {0}mm is not a catalog length")]
    UnknownLength(u32),

    #[error("length {0}mm given more than once")]
    DuplicateLength(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
