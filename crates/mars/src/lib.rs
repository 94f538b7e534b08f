//! Memory Array Redcode Simulator library.
//!
//! This crate implements a deterministic MARS for Core War battles with the following:
//! 1. **Memory:** A circular core of 32-bit cells plus a block-occupancy table for placement.
//! 2. **ISA:** Packed opcode layout, decoding, validation and Redcode disassembly.
//! 3. **Execution:** The addressing-mode resolver and the per-tick instruction executor.
//! 4. **Scheduling:** A circular round-robin warrior queue backed by an arena.
//! 5. **Simulation:** Program loading, random placement, the battle driver and statistics.

/// Common types and constants (wraparound arithmetic, field layout, errors).
pub mod common;
/// Simulation configuration (core size, block size, duration).
pub mod config;
/// Operand resolution and single-instruction execution.
pub mod exec;
/// Instruction set (opcode layout, decoding, disassembly).
pub mod isa;
/// Core memory and the block-occupancy table.
pub mod memory;
/// Round-robin warrior scheduling.
pub mod sched;
/// Simulation state, program loading, placement and battles.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `MarsConfig::default()` or deserialize from JSON.
pub use crate::config::MarsConfig;
/// Umbrella error type for callers that do not care which layer failed.
pub use crate::common::error::MarsError;
/// Packed 32-bit instruction word.
pub use crate::isa::opcode::Opcode;
/// A loadable warrior program.
pub use crate::sim::loader::Program;
/// Top-level simulation; construct with `Simulation::new`.
pub use crate::sim::simulator::{Simulation, TickOutcome};
