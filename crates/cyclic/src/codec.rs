//! Lookup value codec.
//!
//! A lookup value is either an integer literal, packed into exactly n bytes
//! with an explicit [`ByteOrder`], or a literal byte string used unchanged.
//!
//! Integer literals follow the usual "auto radix" rules:
//!
//! ```text
//! 1633771873      decimal
//! 0x61616161      hex      (0X also accepted)
//! 0o14130260541   octal    (0O)
//! 0b0110_0001     binary   (0B), '_' allowed between digits
//! -1, 010, 0x     not packable / not a number
//! ```
//!
//! `010` is not a number (leading zero on a non-zero decimal) and is looked
//! up as the three bytes `"010"`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::alphabet::WindowSize;
use crate::error::{LengthError, Result};

/// Byte order used to pack integer lookup values
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum ByteOrder {
    #[default]
    #[strum(to_string = "little", serialize = "le", serialize = "el")]
    #[serde(rename = "little", alias = "le", alias = "el")]
    LittleEndian,
    #[strum(to_string = "big", serialize = "be", serialize = "eb")]
    #[serde(rename = "big", alias = "be", alias = "eb")]
    BigEndian,
}

/// Pack `value` into exactly `window` bytes.
///
/// Windows wider than 16 bytes are zero-extended on the most significant
/// side.
pub fn pack_numeric(
    value: u128,
    window: WindowSize,
    order: ByteOrder,
) -> std::result::Result<Vec<u8>, LengthError> {
    let n = window.get();
    let significant = (128 - value.leading_zeros() as usize).div_ceil(8);
    if significant > n {
        return Err(LengthError::ValueTooWide {
            value: value.to_string(),
            window: n,
        });
    }

    let mut bytes = value.to_le_bytes().to_vec();
    bytes.resize(n, 0);
    if order == ByteOrder::BigEndian {
        bytes.reverse();
    }
    Ok(bytes)
}

/// Inverse of [`pack_numeric`]. `None` if the value overflows `u128`.
pub fn unpack_numeric(bytes: &[u8], order: ByteOrder) -> Option<u128> {
    let fold =
        |acc: Option<u128>, &b: &u8| acc?.checked_mul(256)?.checked_add(u128::from(b));
    match order {
        ByteOrder::LittleEndian => bytes.iter().rev().fold(Some(0), fold),
        ByteOrder::BigEndian => bytes.iter().fold(Some(0), fold),
    }
}

/// Parsed integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral {
    pub negative: bool,
    /// `None` if the magnitude does not fit in `u128`
    pub magnitude: Option<u128>,
}

/// Parse an integer literal with radix prefixes, sign and `_` separators.
///
/// Returns `None` when `input` is not an integer literal at all.
pub fn parse_int_literal(input: &str) -> Option<IntLiteral> {
    let s = input.trim();
    let (negative, s) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let prefixed = |markers: &[u8]| match s.as_bytes() {
        [b'0', marker, ..] => markers.contains(marker),
        _ => false,
    };
    let magnitude = if prefixed(b"xX") {
        parse_digits(&s[2..], 16, true)?
    } else if prefixed(b"oO") {
        parse_digits(&s[2..], 8, true)?
    } else if prefixed(b"bB") {
        parse_digits(&s[2..], 2, true)?
    } else {
        if s.starts_with('0') && s.bytes().any(|b| b != b'0' && b != b'_') {
            return None;
        }
        parse_digits(s, 10, false)?
    };

    Some(IntLiteral {
        negative,
        magnitude,
    })
}

/// Outer `None`: malformed. Inner `None`: well-formed but overflows `u128`.
fn parse_digits(s: &str, radix: u32, leading_underscore: bool) -> Option<Option<u128>> {
    let s = if leading_underscore {
        s.strip_prefix('_').unwrap_or(s)
    } else {
        s
    };

    let mut value = Some(0u128);
    let mut digits = 0usize;
    let mut previous_underscore = true;
    for c in s.chars() {
        if c == '_' {
            if previous_underscore {
                return None;
            }
            previous_underscore = true;
            continue;
        }
        let digit = c.to_digit(radix)?;
        value = value
            .and_then(|v| v.checked_mul(u128::from(radix)))
            .and_then(|v| v.checked_add(u128::from(digit)));
        digits += 1;
        previous_underscore = false;
    }

    if digits == 0 || previous_underscore {
        return None;
    }
    Some(value)
}

/// Turn a lookup argument into the bytes to search for.
///
/// Integer literals are packed to `window` bytes with `order`; a negative or
/// oversized literal is a [`LengthError`]. Anything else is used verbatim.
pub fn encode_lookup(input: &str, window: WindowSize, order: ByteOrder) -> Result<Vec<u8>> {
    let Some(literal) = parse_int_literal(input) else {
        return Ok(input.as_bytes().to_vec());
    };

    let too_wide = || LengthError::ValueTooWide {
        value: input.trim().to_string(),
        window: window.get(),
    };

    match literal {
        IntLiteral {
            negative: false,
            magnitude: Some(value),
        }
        | IntLiteral {
            negative: true,
            magnitude: Some(value @ 0),
        } => Ok(pack_numeric(value, window, order)?),
        _ => Err(too_wide().into()),
    }
}
