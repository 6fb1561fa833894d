use std::fmt;

use crate::alphabet::{Alphabet, WindowSize};
use crate::error::{AlphabetError, LengthError, Result};

/// An n-byte window to search for, already checked against an alphabet
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Pattern {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// Validate a lookup window.
///
/// Length is checked before membership, so a short pattern reports a
/// [`LengthError`] even if it also holds foreign bytes.
pub fn validate_pattern(bytes: &[u8], alphabet: &Alphabet, window: WindowSize) -> Result<Pattern> {
    if bytes.len() != window.get() {
        return Err(LengthError::PatternLength {
            expected: window.get(),
            actual: bytes.len(),
        }
        .into());
    }

    if let Some(position) = alphabet.first_foreign(bytes) {
        return Err(AlphabetError::ForeignSymbol {
            symbol: bytes[position],
            position,
        }
        .into());
    }

    Ok(Pattern(bytes.to_vec()))
}
