//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::alphabet::{DEFAULT_WINDOW, LOWERCASE};
use crate::codec::ByteOrder;

/// Default number of windows (k^n) above which a lookup warns: 2^32
pub const DEFAULT_SCAN_LIMIT: u64 = 1 << 32;

/// Configuration for a [`Cyclic`](crate::Cyclic) engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclicConfig {
    /// Raw alphabet symbols, validated when the engine is built
    pub alphabet: Vec<u8>,
    /// Size of the unique sub-windows
    pub window: usize,
    /// Byte order for integer lookup values
    pub byte_order: ByteOrder,
    /// Maximum number of windows a lookup may scan
    pub scan_limit: u64,
}

impl Default for CyclicConfig {
    fn default() -> Self {
        Self {
            alphabet: LOWERCASE.to_vec(),
            window: DEFAULT_WINDOW,
            byte_order: ByteOrder::default(),
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }
}

impl CyclicConfig {
    /// Create a new configuration builder
    pub fn builder() -> CyclicConfigBuilder {
        CyclicConfigBuilder::default()
    }
}

/// Builder for CyclicConfig
#[derive(Debug, Clone, Default)]
pub struct CyclicConfigBuilder {
    alphabet: Option<Vec<u8>>,
    window: Option<usize>,
    byte_order: Option<ByteOrder>,
    scan_limit: Option<u64>,
}

impl CyclicConfigBuilder {
    /// Set the alphabet symbols
    pub fn alphabet<A: AsRef<[u8]>>(mut self, symbols: A) -> Self {
        self.alphabet = Some(symbols.as_ref().to_vec());
        self
    }

    /// Set the window size
    pub fn window(mut self, n: usize) -> Self {
        self.window = Some(n);
        self
    }

    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = Some(order);
        self
    }

    /// Set the window count above which lookups warn
    pub fn scan_limit(mut self, limit: u64) -> Self {
        self.scan_limit = Some(limit);
        self
    }

    /// Build the configuration
    pub fn build(self) -> CyclicConfig {
        let default = CyclicConfig::default();
        CyclicConfig {
            alphabet: self.alphabet.unwrap_or(default.alphabet),
            window: self.window.unwrap_or(default.window),
            byte_order: self.byte_order.unwrap_or(default.byte_order),
            scan_limit: self.scan_limit.unwrap_or(default.scan_limit),
        }
    }
}
