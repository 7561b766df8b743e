//! Error type shared by the library and the `multirep` binary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepeatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Empty input: nothing to analyze")]
    EmptyInput,

    /// A symbol does not fit the declared alphabet, so the counting sorts cannot bucket it.
    #[error("Symbol {symbol} at position {position} is outside the alphabet of size {alphabet_size}")]
    SymbolOutOfRange {
        symbol: u32,
        position: usize,
        alphabet_size: usize,
    },

    #[error("Backend {backend} cannot handle an alphabet of {alphabet_size} symbols")]
    UnsupportedAlphabet {
        backend: &'static str,
        alphabet_size: usize,
    },

    #[error("Input too long: {len} symbols exceeds the index limit {limit}")]
    InputTooLong { len: usize, limit: usize },

    #[error("Cross-check failed at multiplicity {multiplicity}: engine {engine}, reference {reference}")]
    Mismatch {
        multiplicity: usize,
        engine: usize,
        reference: usize,
    },

    #[error("{variant} disagrees with the baseline at multiplicity {multiplicity}")]
    Disagreement { variant: String, multiplicity: usize },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, RepeatError>;
