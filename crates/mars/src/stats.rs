//! Simulation statistics collection and reporting.
//!
//! This module tracks what happened during a match. It provides:
//! 1. **Ticks:** Total instructions executed, including `DAT` terminations.
//! 2. **Instruction mix:** Counts per operation type.
//! 3. **Warrior lifecycle:** Loads, removals, `DAT` executions and decode faults.
//!
//! The summary table is produced through `Display`; printing it is up to the caller.

use std::fmt;
use std::time::Instant;

use crate::isa::opcode::OpType;

/// Statistics for one simulation.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Ticks that executed an instruction.
    pub ticks: u64,
    /// Executions per operation type, indexed by [`OpType::index`].
    pub op_counts: [u64; 8],
    /// Ticks on which the running warrior executed `DAT`.
    pub dat_executions: u64,
    /// Fetches that failed to decode.
    pub faults: u64,
    /// Warriors placed into core.
    pub warriors_loaded: u64,
    /// Warriors removed from the ready-queue.
    pub warriors_removed: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            op_counts: [0; 8],
            dat_executions: 0,
            faults: 0,
            warriors_loaded: 0,
            warriors_removed: 0,
        }
    }
}

impl SimStats {
    /// Records one executed instruction.
    #[inline(always)]
    pub const fn record(&mut self, op: OpType) {
        self.ticks += 1;
        self.op_counts[op.index()] += 1;
        if matches!(op, OpType::Dat) {
            self.dat_executions += 1;
        }
    }

    /// Executions of one operation type.
    pub const fn count(&self, op: OpType) -> u64 {
        self.op_counts[op.index()]
    }
}

/// Summary table: host time, instruction mix and warrior lifecycle.
impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let ticks = if self.ticks == 0 { 1 } else { self.ticks };
        let ktps = if seconds > 0.0 {
            (self.ticks as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "MARS SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_ticks                {}", self.ticks)?;
        writeln!(f, "sim_speed                {ktps:.2} kticks/s")?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for op in OpType::ALL {
            let n = self.count(op);
            writeln!(
                f,
                "  op.{:<20} {} ({:.2}%)",
                op.mnemonic().to_lowercase(),
                n,
                (n as f64 / ticks as f64) * 100.0
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "WARRIORS")?;
        writeln!(f, "  warriors.loaded        {}", self.warriors_loaded)?;
        writeln!(f, "  warriors.removed       {}", self.warriors_removed)?;
        writeln!(f, "  dat_executions         {}", self.dat_executions)?;
        writeln!(f, "  decode_faults          {}", self.faults)?;
        writeln!(f, "==========================================================")
    }
}
