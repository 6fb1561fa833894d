//! Offset lookup in the canonical sequence.
//!
//! The sequence is pulled from [`DeBruijn`] in fixed-size chunks and each
//! chunk is searched with a precompiled `memmem` finder. The last n-1 bytes
//! of a chunk are carried into the next one so windows spanning a chunk
//! boundary are not missed. Memory use is bounded by the chunk size no matter
//! how large k^n is; the scan stops at the first match.

use memchr::memmem;
use tracing::{debug, trace};

use crate::alphabet::{Alphabet, WindowSize};
use crate::sequence::DeBruijn;

/// Bytes generated per scan step (1MB)
pub const SCAN_CHUNK_SIZE: usize = 1024 * 1024;

/// Offset of `pattern` as a window of the maximal linear sequence.
///
/// `None` when no window matches: a pattern of the wrong length or one
/// holding bytes outside the alphabet never occurs, and is rejected without
/// scanning.
pub fn find(pattern: &[u8], alphabet: &Alphabet, window: WindowSize) -> Option<u64> {
    find_with_chunk(pattern, alphabet, window, SCAN_CHUNK_SIZE)
}

fn find_with_chunk(
    pattern: &[u8],
    alphabet: &Alphabet,
    window: WindowSize,
    chunk_size: usize,
) -> Option<u64> {
    let n = window.get();
    if pattern.len() != n || alphabet.first_foreign(pattern).is_some() {
        debug!(len = pattern.len(), n, "Pattern cannot occur in sequence");
        return None;
    }

    let finder = memmem::Finder::new(pattern);
    let mut sequence = DeBruijn::new(alphabet, window);
    let mut buffer: Vec<u8> = Vec::with_capacity(chunk_size + n);
    // Sequence offset of buffer[0]
    let mut base = 0u64;

    loop {
        let before = buffer.len();
        buffer.extend(sequence.by_ref().take(chunk_size));
        if buffer.len() == before {
            debug!(scanned = sequence.position(), "Pattern not found");
            return None;
        }

        if let Some(index) = finder.find(&buffer) {
            let offset = base + index as u64;
            debug!(offset, "Pattern found");
            return Some(offset);
        }

        let keep = (n - 1).min(buffer.len());
        let consumed = buffer.len() - keep;
        buffer.drain(..consumed);
        base += consumed as u64;
        trace!(base, "Advanced scan window");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::validate_alphabet;
    use crate::sequence::generate;

    fn window(n: usize) -> WindowSize {
        WindowSize::new(n).unwrap()
    }

    #[test]
    fn test_find_binary_window_two() {
        let alphabet = validate_alphabet(b"ab").unwrap();
        assert_eq!(find(b"aa", &alphabet, window(2)), Some(0));
        assert_eq!(find(b"ab", &alphabet, window(2)), Some(1));
        assert_eq!(find(b"bb", &alphabet, window(2)), Some(2));
        // only present through the wrap-around tail
        assert_eq!(find(b"ba", &alphabet, window(2)), Some(3));
    }

    #[test]
    fn test_find_default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(find(b"aaaa", &alphabet, window(4)), Some(0));
        assert_eq!(find(b"baaa", &alphabet, window(4)), Some(4));
        assert_eq!(find(b"daaa", &alphabet, window(4)), Some(12));
    }

    #[test]
    fn test_find_wrong_length_or_foreign() {
        let alphabet = Alphabet::default();
        assert_eq!(find(b"aaa", &alphabet, window(4)), None);
        assert_eq!(find(b"aaaaa", &alphabet, window(4)), None);
        assert_eq!(find(b"AAAA", &alphabet, window(4)), None);
    }

    #[test]
    fn test_find_across_chunk_boundaries() {
        let alphabet = validate_alphabet(b"abcde").unwrap();
        let (bytes, _) = generate(&alphabet, window(3), u64::MAX);
        for chunk_size in [1, 2, 3, 7, 64] {
            for (i, w) in bytes.windows(3).enumerate() {
                assert_eq!(
                    find_with_chunk(w, &alphabet, window(3), chunk_size),
                    Some(i as u64),
                    "chunk_size={} offset={}",
                    chunk_size,
                    i
                );
            }
        }
    }

    #[test]
    fn test_find_last_window() {
        let alphabet = Alphabet::default();
        let (bytes, _) = generate(&alphabet, window(3), u64::MAX);
        let last = bytes.len() - 3;
        assert_eq!(find(&bytes[last..], &alphabet, window(3)), Some(last as u64));
    }
}
