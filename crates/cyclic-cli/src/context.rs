//! Execution context selection (`-c/--context`).
//!
//! Only the byte order matters for pattern lookups; architecture and OS
//! words are accepted so the usual `-c amd64 -c linux` invocations work.

use std::fmt;
use std::str::FromStr;

use cyclic::ByteOrder;
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr, Display, VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Arch {
    Aarch64,
    Alpha,
    Amd64,
    Arm,
    Avr,
    Cris,
    #[default]
    I386,
    Ia64,
    M68k,
    Mips,
    Mips64,
    Msp430,
    Powerpc,
    Powerpc64,
    Riscv32,
    Riscv64,
    S390,
    Sparc,
    Sparc64,
    Thumb,
    Vax,
}

impl Arch {
    /// Native byte order of the architecture
    pub fn byte_order(self) -> ByteOrder {
        match self {
            Self::M68k
            | Self::Mips
            | Self::Mips64
            | Self::Powerpc
            | Self::Powerpc64
            | Self::S390
            | Self::Sparc
            | Self::Sparc64 => ByteOrder::BigEndian,
            _ => ByteOrder::LittleEndian,
        }
    }

    fn from_alias(word: &str) -> Option<Self> {
        let arch = match word.to_ascii_lowercase().as_str() {
            "x86" | "i686" => Self::I386,
            "x86_64" | "x86-64" | "amd" => Self::Amd64,
            "arm64" => Self::Aarch64,
            "ppc" => Self::Powerpc,
            "ppc64" => Self::Powerpc64,
            _ => return None,
        };
        Some(arch)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr, Display, VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Os {
    Android,
    Baremetal,
    Cgc,
    Darwin,
    Freebsd,
    #[default]
    Linux,
    Windows,
}

/// One `-c` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextWord {
    Arch(Arch),
    Os(Os),
    Endian(ByteOrder),
}

impl FromStr for ContextWord {
    type Err = String;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        if let Ok(order) = word.parse::<ByteOrder>() {
            return Ok(Self::Endian(order));
        }
        if let Some(arch) = word.parse::<Arch>().ok().or_else(|| Arch::from_alias(word)) {
            return Ok(Self::Arch(arch));
        }
        if let Ok(os) = word.parse::<Os>() {
            return Ok(Self::Os(os));
        }
        Err(format!(
            "unknown context '{}', choose from: {}, {}, little, big",
            word,
            Arch::VARIANTS.join(", "),
            Os::VARIANTS.join(", ")
        ))
    }
}

/// Resolved execution context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub arch: Arch,
    pub os: Os,
    pub byte_order: ByteOrder,
}

impl Default for Context {
    fn default() -> Self {
        let arch = Arch::default();
        Self {
            arch,
            os: Os::default(),
            byte_order: arch.byte_order(),
        }
    }
}

impl Context {
    /// Apply words in order; an architecture resets the byte order to its
    /// native one, a later endianness word overrides it.
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a ContextWord>,
    {
        let mut context = Self::default();
        for word in words {
            context.apply(*word);
        }
        context
    }

    pub fn apply(&mut self, word: ContextWord) {
        match word {
            ContextWord::Arch(arch) => {
                self.arch = arch;
                self.byte_order = arch.byte_order();
            }
            ContextWord::Os(os) => self.os = os,
            ContextWord::Endian(order) => self.byte_order = order,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.os, self.arch, self.byte_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&str]) -> Vec<ContextWord> {
        input.iter().map(|w| w.parse().unwrap()).collect()
    }

    #[test]
    fn test_default_context() {
        let context = Context::default();
        assert_eq!(context.arch, Arch::I386);
        assert_eq!(context.os, Os::Linux);
        assert_eq!(context.byte_order, ByteOrder::LittleEndian);
        assert_eq!(context.to_string(), "linux/i386/little");
    }

    #[test]
    fn test_parse_words() {
        assert_eq!("amd64".parse::<ContextWord>(), Ok(ContextWord::Arch(Arch::Amd64)));
        assert_eq!("x86_64".parse::<ContextWord>(), Ok(ContextWord::Arch(Arch::Amd64)));
        assert_eq!("MIPS".parse::<ContextWord>(), Ok(ContextWord::Arch(Arch::Mips)));
        assert_eq!("windows".parse::<ContextWord>(), Ok(ContextWord::Os(Os::Windows)));
        assert_eq!("be".parse::<ContextWord>(), Ok(ContextWord::Endian(ByteOrder::BigEndian)));
        assert!("pdp11".parse::<ContextWord>().is_err());
    }

    #[test]
    fn test_arch_sets_native_order() {
        let context = Context::from_words(&words(&["linux", "mips"]));
        assert_eq!(context.byte_order, ByteOrder::BigEndian);
        assert_eq!(context.os, Os::Linux);
    }

    #[test]
    fn test_later_words_win() {
        let context = Context::from_words(&words(&["mips", "little"]));
        assert_eq!(context.byte_order, ByteOrder::LittleEndian);

        let context = Context::from_words(&words(&["big", "amd64"]));
        assert_eq!(context.byte_order, ByteOrder::LittleEndian);
    }
}
