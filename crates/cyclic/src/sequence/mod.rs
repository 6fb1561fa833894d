//! Canonical cyclic sequence generation.
//!
//! The canonical sequence for an alphabet of k symbols and window n is the
//! lexicographically least de Bruijn sequence B(k, n): the concatenation, in
//! lexicographic order, of every Lyndon word over the ordered alphabet whose
//! length divides n. Its k^n bytes hold every n-byte word exactly once when
//! read cyclically. The linear form used for patterns appends the first n-1
//! bytes again, giving k^n + n - 1 bytes where every n-byte window is unique.
//!
//! ```text
//! alphabet "ab", n = 2
//!   Lyndon words:  a | ab | b    -> cyclic  "aabb"
//!   linear:        "aabb" + "a"  -> "aabba"  (aa, ab, bb, ba)
//! ```
//!
//! Offsets returned by lookups depend on this exact construction. It must
//! not change.

mod lyndon;

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::alphabet::{Alphabet, WindowSize};

use lyndon::LyndonWords;

/// Number of distinct windows, k^n. `None` if it overflows `u128`.
pub fn window_count(k: usize, window: WindowSize) -> Option<u128> {
    let n = u32::try_from(window.get()).ok()?;
    (k as u128).checked_pow(n)
}

/// Length of the maximal linear sequence, k^n + n - 1. `None` on overflow.
pub fn max_len(k: usize, window: WindowSize) -> Option<u128> {
    window_count(k, window)?.checked_add(window.get() as u128 - 1)
}

/// Requested output length exceeds what the alphabet and window can realize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityWarning {
    pub requested: u64,
    pub achievable: u64,
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet too small (max length = {})", self.achievable)
    }
}

/// Lazy byte stream over the linear canonical sequence.
///
/// Holds only the alphabet, the window, the current Lyndon word and the
/// position. The first n-1 bytes are remembered while they are produced so
/// the wrap-around tail can be replayed without regenerating.
#[derive(Debug, Clone)]
pub struct DeBruijn<'a> {
    alphabet: &'a Alphabet,
    window: WindowSize,
    words: LyndonWords,
    cursor: usize,
    head: Vec<u8>,
    tail: usize,
    position: u64,
    limit: u64,
}

impl<'a> DeBruijn<'a> {
    /// Full maximal sequence (saturating at `u64::MAX` bytes)
    pub fn new(alphabet: &'a Alphabet, window: WindowSize) -> Self {
        let limit = max_len(alphabet.len(), window)
            .map_or(u64::MAX, |len| u64::try_from(len).unwrap_or(u64::MAX));

        Self {
            alphabet,
            window,
            words: LyndonWords::new(alphabet.len(), window.get()),
            cursor: 0,
            head: Vec::with_capacity(window.get() - 1),
            tail: 0,
            position: 0,
            limit,
        }
    }

    /// Stop after at most `count` bytes
    pub fn truncate(mut self, count: u64) -> Self {
        self.limit = self.limit.min(count);
        self
    }

    /// Bytes produced so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total bytes this stream will produce
    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Rewind to offset zero, keeping the truncation limit
    pub fn reset(&mut self) {
        self.words = LyndonWords::new(self.alphabet.len(), self.window.get());
        self.cursor = 0;
        self.head.clear();
        self.tail = 0;
        self.position = 0;
    }

    fn next_cyclic(&mut self) -> Option<u8> {
        let (digit, word_len) = {
            let word = self.words.current()?;
            (word[self.cursor], word.len())
        };

        self.cursor += 1;
        if self.cursor == word_len {
            self.cursor = 0;
            self.words.advance();
        }

        let byte = self.alphabet.symbol(usize::from(digit));
        if self.head.len() < self.window.get() - 1 {
            self.head.push(byte);
        }
        Some(byte)
    }

    fn next_wrapped(&mut self) -> Option<u8> {
        let byte = *self.head.get(self.tail)?;
        self.tail += 1;
        Some(byte)
    }
}

impl Iterator for DeBruijn<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.position >= self.limit {
            return None;
        }

        let byte = self.next_cyclic().or_else(|| self.next_wrapped())?;
        self.position += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.position;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for DeBruijn<'_> {}

/// Stream the first `count` bytes of the canonical sequence.
///
/// When `count` exceeds the maximal length the stream is cut at the maximum
/// and a [`CapacityWarning`] is returned alongside it.
pub fn stream(
    alphabet: &Alphabet,
    window: WindowSize,
    count: u64,
) -> (DeBruijn<'_>, Option<CapacityWarning>) {
    let sequence = DeBruijn::new(alphabet, window);
    let achievable = sequence.limit();
    let warning = (count > achievable).then_some(CapacityWarning {
        requested: count,
        achievable,
    });

    debug!(
        k = alphabet.len(),
        n = window.get(),
        count,
        achievable,
        "Generating cyclic sequence"
    );

    (sequence.truncate(count), warning)
}

/// Materialize the first `count` bytes of the canonical sequence.
pub fn generate(
    alphabet: &Alphabet,
    window: WindowSize,
    count: u64,
) -> (Vec<u8>, Option<CapacityWarning>) {
    let (sequence, warning) = stream(alphabet, window, count);
    (sequence.collect(), warning)
}
