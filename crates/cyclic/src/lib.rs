//! # cyclic
//!
//! De Bruijn cyclic patterns for locating offsets in memory corruption work.
//!
//! This crate provides:
//! - Alphabet, window and lookup pattern validation
//! - Lazy generation of the canonical maximal-uniqueness sequence
//! - Streaming offset lookup of a window in that sequence
//! - Integer packing of lookup values with an explicit byte order
//!
//! The canonical sequence is the lexicographically least de Bruijn sequence
//! over the ordered alphabet (see [`sequence`]), extended by its first n-1
//! bytes so every n-byte window of the linear string is unique.

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod locator;
pub mod pattern;
pub mod prelude;
pub mod sequence;

pub use alphabet::{Alphabet, DEFAULT_WINDOW, LOWERCASE, MAX_WINDOW, WindowSize, validate_alphabet};
pub use codec::{
    ByteOrder, IntLiteral, encode_lookup, pack_numeric, parse_int_literal, unpack_numeric,
};
pub use config::{CyclicConfig, CyclicConfigBuilder, DEFAULT_SCAN_LIMIT};
pub use engine::Cyclic;
pub use error::{AlphabetError, Error, LengthError, Result};
pub use locator::find;
pub use pattern::{Pattern, validate_pattern};
pub use sequence::{CapacityWarning, DeBruijn, generate, max_len, stream, window_count};
