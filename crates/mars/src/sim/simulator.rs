//! Simulation: owns core memory, the warrior queue and the tick counter.
//!
//! All match state lives in one [`Simulation`] value and is passed explicitly,
//! so independent matches can run side by side in one process.

use tracing::{debug, trace};

use crate::common::error::{ConfigError, SimError};
use crate::config::MarsConfig;
use crate::exec::executor::{Effect, execute};
use crate::isa::decode::Instruction;
use crate::isa::opcode::OpType;
use crate::memory::CoreMemory;
use crate::sched::queue::{Warrior, WarriorHandle, WarriorQueue};
use crate::stats::SimStats;

/// Why a tick did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The ready-queue is empty.
    NoWarriors,
    /// `elapsed` reached `duration`.
    DurationReached,
}

/// What one call to [`Simulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The running warrior executed a non-`DAT` instruction.
    Executed {
        /// Queue handle of the warrior that ran.
        warrior: WarriorHandle,
        /// Program identifier of the warrior that ran.
        id: u32,
        /// Operation executed.
        op: OpType,
        /// Address the instruction was fetched from.
        addr: usize,
        /// The warrior's program counter after the tick.
        next_pc: usize,
    },
    /// The running warrior executed `DAT` at `addr`.
    ///
    /// The warrior stays in the queue; removing it is the caller's decision.
    DatExecuted {
        /// Queue handle of the warrior that ran.
        warrior: WarriorHandle,
        /// Program identifier of the warrior that ran.
        id: u32,
        /// Address of the `DAT`.
        addr: usize,
    },
    /// The match is over; nothing was executed.
    Ended(EndReason),
}

impl TickOutcome {
    /// Whether this outcome signals the end of the match.
    pub const fn is_ended(&self) -> bool {
        matches!(self, Self::Ended(_))
    }
}

/// One MARS match.
#[derive(Debug)]
pub struct Simulation {
    pub(crate) config: MarsConfig,
    pub(crate) elapsed: u64,
    pub(crate) alive_count: usize,
    pub(crate) memory: CoreMemory,
    pub(crate) warriors: WarriorQueue,
    pub(crate) stats: SimStats,
}

impl Simulation {
    /// Creates a simulation with a zeroed core and no warriors.
    ///
    /// # Arguments
    ///
    /// * `config` - Core size, block size and duration.
    ///
    /// # Returns
    ///
    /// The simulation, or the [`ConfigError`] from [`MarsConfig::validate`].
    pub fn new(config: MarsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            memory: CoreMemory::new(config.core_size, config.block_size)?,
            config,
            elapsed: 0,
            alive_count: 0,
            warriors: WarriorQueue::new(),
            stats: SimStats::default(),
        })
    }

    /// The configuration this simulation was created with.
    pub const fn config(&self) -> &MarsConfig {
        &self.config
    }

    /// Number of cells in core.
    pub const fn core_size(&self) -> usize {
        self.config.core_size
    }

    /// Cells per placement block.
    pub const fn block_size(&self) -> usize {
        self.config.block_size
    }

    /// Tick budget.
    pub const fn duration(&self) -> u64 {
        self.config.duration
    }

    /// Ticks executed so far.
    pub const fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Warriors loaded and not yet removed.
    pub const fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Core memory.
    pub const fn memory(&self) -> &CoreMemory {
        &self.memory
    }

    /// Core memory, mutably. Intended for tools and tests that seed core directly.
    pub const fn memory_mut(&mut self) -> &mut CoreMemory {
        &mut self.memory
    }

    /// The ready-queue.
    pub const fn warriors(&self) -> &WarriorQueue {
        &self.warriors
    }

    /// The warrior that runs on the next tick.
    pub const fn next_warrior(&self) -> Option<WarriorHandle> {
        self.warriors.entry()
    }

    /// Looks up a live warrior.
    pub fn warrior(&self, handle: WarriorHandle) -> Option<&Warrior> {
        self.warriors.get(handle)
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Whether the next tick would be a no-op.
    pub const fn is_over(&self) -> bool {
        self.warriors.is_empty() || self.elapsed >= self.config.duration
    }

    /// Moves a warrior's program counter to `wrap(pc)`.
    pub fn set_pc(&mut self, handle: WarriorHandle, pc: i64) -> Result<(), SimError> {
        let pc = self.memory.wrap(pc);
        let warrior = self
            .warriors
            .get_mut(handle)
            .ok_or(SimError::UnknownWarrior(handle))?;
        warrior.pc = pc;
        Ok(())
    }

    /// Removes a warrior from the match (the elimination hook).
    ///
    /// # Arguments
    ///
    /// * `handle` - The warrior to remove.
    ///
    /// # Returns
    ///
    /// The removed record, or [`SimError::UnknownWarrior`].
    pub fn remove_warrior(&mut self, handle: WarriorHandle) -> Result<Warrior, SimError> {
        let warrior = self.warriors.remove(handle)?;
        self.alive_count = self.alive_count.saturating_sub(1);
        self.stats.warriors_removed += 1;
        debug!(warrior = %handle, id = warrior.id, pc = warrior.pc, "warrior removed");
        Ok(warrior)
    }

    /// Executes one instruction of the warrior at the head of the queue.
    ///
    /// Fetches the word at the warrior's program counter, decodes it, applies
    /// it to core, updates the program counter, counts the tick and rotates
    /// the queue. `DAT` consumes the tick and rotates the queue but leaves the
    /// program counter where it was.
    ///
    /// # Returns
    ///
    /// * `Ok(TickOutcome::Ended(_))` if the queue is empty or the duration is spent.
    /// * `Ok(TickOutcome::DatExecuted { .. })` if the warrior hit `DAT`.
    /// * `Ok(TickOutcome::Executed { .. })` otherwise.
    /// * `Err(SimError::Fault { .. })` if the fetched word does not decode; in
    ///   that case nothing was changed.
    pub fn tick(&mut self) -> Result<TickOutcome, SimError> {
        let Some(handle) = self.warriors.entry() else {
            return Ok(TickOutcome::Ended(EndReason::NoWarriors));
        };
        if self.elapsed >= self.config.duration {
            return Ok(TickOutcome::Ended(EndReason::DurationReached));
        }
        let (id, addr) = self
            .warriors
            .get(handle)
            .map(|w| (w.id, w.pc))
            .ok_or(SimError::UnknownWarrior(handle))?;

        let instr = Instruction::decode(self.memory.fetch(addr)).map_err(|source| {
            self.stats.faults += 1;
            debug!(warrior = %handle, id, addr, error = %source, "decode fault");
            SimError::Fault {
                warrior: handle,
                id,
                addr,
                source,
            }
        })?;
        trace!(warrior = %handle, id, addr, instr = %instr, "execute");

        let effect = execute(&mut self.memory, addr, &instr).map_err(|source| SimError::Fault {
            warrior: handle,
            id,
            addr,
            source,
        })?;

        self.stats.record(instr.op);
        self.elapsed += 1;

        let outcome = match effect {
            Effect::Dat => {
                debug!(warrior = %handle, id, addr, "executed DAT");
                TickOutcome::DatExecuted {
                    warrior: handle,
                    id,
                    addr,
                }
            }
            Effect::Continue { next_pc } => {
                if let Some(w) = self.warriors.get_mut(handle) {
                    w.pc = next_pc;
                }
                TickOutcome::Executed {
                    warrior: handle,
                    id,
                    op: instr.op,
                    addr,
                    next_pc,
                }
            }
        };

        self.warriors.advance();
        Ok(outcome)
    }

    /// Ticks until the match ends or a warrior executes `DAT` or faults.
    ///
    /// # Returns
    ///
    /// The first outcome that is not [`TickOutcome::Executed`].
    pub fn run_until_event(&mut self) -> Result<TickOutcome, SimError> {
        loop {
            match self.tick()? {
                TickOutcome::Executed { .. } => {}
                other => return Ok(other),
            }
        }
    }
}
