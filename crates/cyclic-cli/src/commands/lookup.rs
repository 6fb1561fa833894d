//! Lookup command implementation.

use anyhow::{Result, bail};
use cyclic::Cyclic;
use tracing::debug;

/// Run the lookup command
pub fn run(engine: &Cyclic, value: &str) -> Result<()> {
    let offset = find_offset(engine, value)?;
    println!("{}", offset);
    Ok(())
}

/// Offset of `value` in the pattern; absence is an error at this level
pub fn find_offset(engine: &Cyclic, value: &str) -> Result<u64> {
    let pattern = engine.pattern(value)?;
    debug!(?pattern, "Searching");

    match engine.find(&pattern)? {
        Some(offset) => Ok(offset),
        None => bail!("Given pattern does not exist in cyclic pattern"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclic::{ByteOrder, CyclicConfig};

    fn engine(order: ByteOrder) -> Cyclic {
        Cyclic::new(CyclicConfig::builder().byte_order(order).build()).unwrap()
    }

    #[test]
    fn test_find_offset_literal() {
        let engine = engine(ByteOrder::LittleEndian);
        assert_eq!(find_offset(&engine, "faab").unwrap(), 120);
    }

    #[test]
    fn test_find_offset_numeric_follows_byte_order() {
        let little = engine(ByteOrder::LittleEndian);
        let big = engine(ByteOrder::BigEndian);

        // all three pack to "baaa"
        assert_eq!(find_offset(&little, "0x61616162").unwrap(), 4);
        assert_eq!(find_offset(&little, "1633771874").unwrap(), 4);
        assert_eq!(find_offset(&big, "0x62616161").unwrap(), 4);
    }

    #[test]
    fn test_find_offset_errors() {
        let engine = engine(ByteOrder::LittleEndian);

        let err = find_offset(&engine, "aaa").unwrap_err();
        assert_eq!(err.to_string(), "Subpattern must be 4 bytes, got 3");

        let err = find_offset(&engine, "aaA!").unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Pattern contains characters not present in the alphabet")
        );
    }
}
