//! Lyndon word enumeration (Fredricksen-Kessler-Maiorana).
//!
//! Walks every prenecklace of length n over digits `0..k` in lexicographic
//! order. Each time the current period `p` divides `n`, the prefix `a[..p]`
//! is a Lyndon word whose length divides n. Concatenating those words in
//! order yields the lexicographically least de Bruijn sequence B(k, n),
//! which is also what the classical recursive `db(t, p)` construction emits.

/// Iterative FKM walker. State is the current prenecklace and its period.
///
/// Digits are stored as bytes: an alphabet never exceeds 256 symbols.
#[derive(Debug, Clone)]
pub(crate) struct LyndonWords {
    k: usize,
    word: Vec<u8>,
    period: usize,
    done: bool,
}

impl LyndonWords {
    pub(crate) fn new(k: usize, n: usize) -> Self {
        debug_assert!((2..=256).contains(&k) && n >= 1);
        Self {
            k,
            word: vec![0; n],
            // "0" is always the first Lyndon word
            period: 1,
            done: false,
        }
    }

    /// Digits of the current Lyndon word, or `None` once exhausted
    #[inline]
    pub(crate) fn current(&self) -> Option<&[u8]> {
        (!self.done).then(|| &self.word[..self.period])
    }

    /// Step to the next Lyndon word whose length divides n
    pub(crate) fn advance(&mut self) {
        let n = self.word.len();
        while !self.done {
            let mut i = n;
            while i > 0 && usize::from(self.word[i - 1]) == self.k - 1 {
                i -= 1;
            }
            if i == 0 {
                self.done = true;
                return;
            }

            self.word[i - 1] += 1;
            for j in i..n {
                self.word[j] = self.word[j - i];
            }
            self.period = i;

            if n % i == 0 {
                return;
            }
        }
    }
}
