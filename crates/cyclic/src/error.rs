use thiserror::Error;

/// Problems with an alphabet, or with a pattern's membership in it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("Alphabet must contain at least 2 symbols, got {0}")]
    TooSmall(usize),

    #[error("Alphabet contains duplicate symbol {symbol:#04x} at position {position}")]
    DuplicateSymbol { symbol: u8, position: usize },

    #[error("Pattern contains characters not present in the alphabet ({symbol:#04x} at position {position})")]
    ForeignSymbol { symbol: u8, position: usize },
}

/// A pattern or packed value whose width disagrees with the window size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("Subpattern must be {expected} bytes, got {actual}")]
    PatternLength { expected: usize, actual: usize },

    #[error("Value {value} does not fit in {window} bytes")]
    ValueTooWide { value: String, window: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Alphabet(#[from] AlphabetError),

    #[error(transparent)]
    Length(#[from] LengthError),

    #[error("Window size must be at least 1")]
    InvalidWindow,

    #[error("Window size {window} exceeds the maximum of {limit}")]
    WindowTooLarge { window: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from alphabet or membership validation
    pub fn is_alphabet_error(&self) -> bool {
        matches!(self, Error::Alphabet(_))
    }

    /// Check if this error is a width mismatch against the window size
    pub fn is_length_error(&self) -> bool {
        matches!(self, Error::Length(_))
    }
}
