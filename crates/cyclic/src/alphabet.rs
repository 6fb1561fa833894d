//! Alphabet and window-size validation.
//!
//! An [`Alphabet`] is an ordered set of distinct byte symbols. Order defines
//! generation order; lookups only need membership, which is answered from a
//! 256-entry index table.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{AlphabetError, Error, Result};

/// All lower case ASCII letters, the customary pattern alphabet
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Default window size (4 bytes, one 32-bit word)
pub const DEFAULT_WINDOW: usize = 4;

/// Widest accepted window; generation buffers a few windows' worth of state
pub const MAX_WINDOW: usize = 4096;

/// Ordered set of distinct byte symbols (2..=256 entries)
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index: [Option<u8>; 256],
}

impl Alphabet {
    /// Number of symbols (k)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a validated alphabet holds at least two symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Symbol at digit position `digit`
    #[inline]
    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    /// Digit position of `symbol`, if it belongs to the alphabet
    #[inline]
    pub fn position(&self, symbol: u8) -> Option<usize> {
        self.index[symbol as usize].map(usize::from)
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.index[symbol as usize].is_some()
    }

    /// Index of the first byte that is not in the alphabet
    pub fn first_foreign(&self, bytes: &[u8]) -> Option<usize> {
        bytes.iter().position(|&b| !self.contains(b))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        // LOWERCASE is distinct by construction
        let mut index = [None; 256];
        for (i, &b) in LOWERCASE.iter().enumerate() {
            index[b as usize] = Some(i as u8);
        }
        Self {
            symbols: LOWERCASE.to_vec(),
            index,
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}

impl TryFrom<&[u8]> for Alphabet {
    type Error = Error;

    fn try_from(symbols: &[u8]) -> Result<Self> {
        validate_alphabet(symbols)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Error;

    fn try_from(symbols: &str) -> Result<Self> {
        validate_alphabet(symbols.as_bytes())
    }
}

/// Validate raw symbols into an [`Alphabet`].
///
/// Fails when fewer than two symbols are given or when a symbol repeats.
pub fn validate_alphabet(symbols: &[u8]) -> Result<Alphabet> {
    if symbols.len() < 2 {
        return Err(AlphabetError::TooSmall(symbols.len()).into());
    }

    let mut index = [None; 256];
    for (position, &symbol) in symbols.iter().enumerate() {
        let slot = &mut index[symbol as usize];
        if slot.is_some() {
            return Err(AlphabetError::DuplicateSymbol { symbol, position }.into());
        }
        // position < 256 because every symbol is a distinct byte
        *slot = Some(position as u8);
    }

    Ok(Alphabet {
        symbols: symbols.to_vec(),
        index,
    })
}

/// Length of each unique sub-window (1 <= n <= [`MAX_WINDOW`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    pub fn new(n: usize) -> Result<Self> {
        if n > MAX_WINDOW {
            return Err(Error::WindowTooLarge {
                window: n,
                limit: MAX_WINDOW,
            });
        }
        NonZeroUsize::new(n).map(Self).ok_or(Error::InvalidWindow)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_WINDOW - 1))
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self> {
        Self::new(n)
    }
}

impl From<WindowSize> for usize {
    fn from(window: WindowSize) -> usize {
        window.get()
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_alphabet_ordered_lookup() {
        let alphabet = validate_alphabet(b"xyz").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.symbol(0), b'x');
        assert_eq!(alphabet.position(b'z'), Some(2));
        assert_eq!(alphabet.position(b'a'), None);
        assert!(alphabet.contains(b'y'));
    }

    #[test]
    fn test_validate_alphabet_too_small() {
        let err = validate_alphabet(b"a").unwrap_err();
        assert!(matches!(err, Error::Alphabet(AlphabetError::TooSmall(1))));

        let err = validate_alphabet(b"").unwrap_err();
        assert!(matches!(err, Error::Alphabet(AlphabetError::TooSmall(0))));
    }

    #[test]
    fn test_validate_alphabet_duplicate() {
        let err = validate_alphabet(b"abca").unwrap_err();
        assert!(matches!(
            err,
            Error::Alphabet(AlphabetError::DuplicateSymbol {
                symbol: b'a',
                position: 3
            })
        ));
    }

    #[test]
    fn test_full_byte_alphabet() {
        let all: Vec<u8> = (0..=255).collect();
        let alphabet = validate_alphabet(&all).unwrap();
        assert_eq!(alphabet.len(), 256);
        assert_eq!(alphabet.position(255), Some(255));
    }

    #[test]
    fn test_default_alphabet_is_lowercase() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet, validate_alphabet(LOWERCASE).unwrap());
        assert_eq!(alphabet.first_foreign(b"abcD"), Some(3));
        assert_eq!(alphabet.first_foreign(b"abcd"), None);
    }

    #[test]
    fn test_window_size() {
        assert!(WindowSize::new(0).is_err());
        assert_eq!(WindowSize::new(1).unwrap().get(), 1);
        assert_eq!(WindowSize::default().get(), DEFAULT_WINDOW);
    }

    #[test]
    fn test_window_size_upper_bound() {
        assert_eq!(WindowSize::new(MAX_WINDOW).unwrap().get(), MAX_WINDOW);

        let err = WindowSize::new(MAX_WINDOW + 1).unwrap_err();
        assert!(matches!(
            err,
            Error::WindowTooLarge {
                window,
                limit: MAX_WINDOW
            } if window == MAX_WINDOW + 1
        ));

        // rejected before anything is sized from it
        assert!(WindowSize::new(usize::MAX / 4).is_err());
        assert!(WindowSize::try_from(usize::MAX).is_err());
    }
}
