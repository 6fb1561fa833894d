//! Validated pattern engine.
//!
//! `Cyclic` checks an alphabet and window once and then answers generation
//! and lookup requests against them.
//!
//! ## Example
//!
//! ```
//! use cyclic::{Cyclic, CyclicConfig};
//!
//! let engine = Cyclic::new(CyclicConfig::default()).unwrap();
//! let (bytes, warning) = engine.generate(20);
//! assert_eq!(bytes, b"aaaabaaacaaadaaaeaaa");
//! assert!(warning.is_none());
//!
//! assert_eq!(engine.lookup("daaa").unwrap(), Some(12));
//! assert_eq!(engine.lookup("0x61616164").unwrap(), Some(12));
//! ```

use tracing::{debug, warn};

use crate::alphabet::{Alphabet, WindowSize, validate_alphabet};
use crate::codec::{ByteOrder, encode_lookup, pack_numeric};
use crate::config::CyclicConfig;
use crate::error::Result;
use crate::locator;
use crate::pattern::{Pattern, validate_pattern};
use crate::sequence::{self, CapacityWarning, DeBruijn};

#[derive(Debug, Clone)]
pub struct Cyclic {
    alphabet: Alphabet,
    window: WindowSize,
    byte_order: ByteOrder,
    scan_limit: u64,
}

impl Cyclic {
    pub fn new(config: CyclicConfig) -> Result<Self> {
        let alphabet = validate_alphabet(&config.alphabet)?;
        let window = WindowSize::new(config.window)?;
        debug!(
            k = alphabet.len(),
            n = window.get(),
            byte_order = %config.byte_order,
            "Cyclic engine ready"
        );

        Ok(Self {
            alphabet,
            window,
            byte_order: config.byte_order,
            scan_limit: config.scan_limit,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Number of distinct windows, k^n (`None` if beyond `u128`)
    pub fn window_count(&self) -> Option<u128> {
        sequence::window_count(self.alphabet.len(), self.window)
    }

    /// Length of the maximal linear sequence (`None` if beyond `u128`)
    pub fn max_len(&self) -> Option<u128> {
        sequence::max_len(self.alphabet.len(), self.window)
    }

    /// Lazily produce the first `count` bytes
    pub fn stream(&self, count: u64) -> (DeBruijn<'_>, Option<CapacityWarning>) {
        sequence::stream(&self.alphabet, self.window, count)
    }

    /// Materialize the first `count` bytes
    pub fn generate(&self, count: u64) -> (Vec<u8>, Option<CapacityWarning>) {
        sequence::generate(&self.alphabet, self.window, count)
    }

    /// Pack an integer into one window with the configured byte order
    pub fn pack(&self, value: u128) -> Result<Vec<u8>> {
        Ok(pack_numeric(value, self.window, self.byte_order)?)
    }

    /// Decode a lookup argument and validate it against the alphabet
    pub fn pattern(&self, input: &str) -> Result<Pattern> {
        let bytes = encode_lookup(input, self.window, self.byte_order)?;
        validate_pattern(&bytes, &self.alphabet, self.window)
    }

    /// Offset of a validated pattern.
    ///
    /// Lookups over more than `scan_limit` windows still run; the scan
    /// stops at the first match, so only a late or missing pattern pays
    /// for the full sequence.
    pub fn find(&self, pattern: &Pattern) -> Result<Option<u64>> {
        self.warn_on_long_scan();
        Ok(locator::find(pattern.as_bytes(), &self.alphabet, self.window))
    }

    /// Decode, validate and locate a lookup argument
    pub fn lookup(&self, input: &str) -> Result<Option<u64>> {
        let pattern = self.pattern(input)?;
        debug!(?pattern, "Looking up pattern");
        self.find(&pattern)
    }

    /// Whether a worst-case lookup would scan more than `scan_limit` windows
    pub fn exceeds_scan_limit(&self) -> bool {
        let windows = self.window_count().unwrap_or(u128::MAX);
        windows > u128::from(self.scan_limit)
    }

    fn warn_on_long_scan(&self) {
        if self.exceeds_scan_limit() {
            warn!(
                windows = ?self.window_count(),
                limit = self.scan_limit,
                "Lookup may scan a very long sequence"
            );
        }
    }
}
