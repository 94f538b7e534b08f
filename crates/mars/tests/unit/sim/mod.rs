


/// Tick semantics and end conditions.
pub mod simulator;
