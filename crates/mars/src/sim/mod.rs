//! Simulation driver.
//!
//! This module ties core memory, the executor and the scheduler together. It provides:
//! 1. **Simulator:** The [`Simulation`] state and its single-step `tick`.
//! 2. **Loader:** Program images and block/offset placement.
//! 3. **Placement:** Random placement into free blocks.
//! 4. **Battle:** A driver that eliminates warriors and reports a result.

/// Match driver with elimination policy.
pub mod battle;

/// Program parsing and placement.
pub mod loader;

/// Random block placement.
pub mod placement;

/// Simulation state and the tick loop.
pub mod simulator;

pub use battle::{BattleReport, BattleResult, Cause, Elimination};
pub use loader::Program;
pub use placement::place_randomly;
pub use simulator::{EndReason, Simulation, TickOutcome};
