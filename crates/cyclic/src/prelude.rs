//! Prelude module for convenient imports
//!
//! ```ignore
//! use cyclic::prelude::*;
//! ```
//!
//! Brings the engine, its configuration, the validated value types and the
//! error types into scope.

pub use crate::alphabet::{Alphabet, WindowSize};
pub use crate::codec::ByteOrder;
pub use crate::config::CyclicConfig;
pub use crate::engine::Cyclic;
pub use crate::error::{Error, Result};
pub use crate::pattern::Pattern;
pub use crate::sequence::CapacityWarning;
