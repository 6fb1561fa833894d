//! CLI command implementations.
//!
//! This module contains the implementation of each CLI mode.

pub mod generate;
pub mod lookup;
