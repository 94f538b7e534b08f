//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component. It includes:
//! 1. **Addressing:** Modular wraparound arithmetic over the core.
//! 2. **Constants:** Opcode field widths, masks and shifts.
//! 3. **Error Handling:** Decode, load, configuration and simulation errors.

/// Wraparound address arithmetic.
pub mod addr;

/// Opcode layout constants.
pub mod constants;

/// Error types for every fallible operation.
pub mod error;

pub use addr::wrap;
pub use error::{ConfigError, DecodeError, LoadError, MarsError, SimError};
