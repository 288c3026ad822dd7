use thiserror;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("numRounds cannot exceed the permutation's round count")]
    RoundCountExceeded,

    #[error("output length must be greater than 0")]
    InvalidOutputLength,

    #[error("B must be greater than 0")]
    InvalidBlockSize,

    #[error("offset/len out of bounds")]
    OutOfBounds,

    #[error("reader is closed")]
    ReaderClosed,

    #[error("digest was not built in XOF mode")]
    NotXofMode,
}

pub type Result<T> = core::result::Result<T, Error>;
