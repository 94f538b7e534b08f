//! Warrior scheduling.
//!
//! Execution is single-stepped and round-robin: each tick runs exactly one
//! instruction of the warrior at the head of a circular ready-queue.

/// Arena-backed circular ready-queue.
pub mod queue;

pub use queue::{Warrior, WarriorHandle, WarriorQueue};
