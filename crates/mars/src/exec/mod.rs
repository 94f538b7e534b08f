//! Instruction execution.
//!
//! Provides the two halves of running one instruction:
//! 1. **Resolver:** Pure operand value/address computation with wraparound.
//! 2. **Executor:** The per-type state transition against core memory.

/// Per-instruction state transition.
pub mod executor;
/// Addressing-mode resolution.
pub mod resolver;

pub use executor::{Effect, execute};
pub use resolver::{resolve_address, resolve_value};
