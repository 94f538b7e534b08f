//! Error definitions.
//!
//! This module defines every failure surface of the simulator. It provides:
//! 1. **Decode errors:** Malformed opcodes reached at fetch time (expected in combat).
//! 2. **Load errors:** Bad placements and malformed program binaries.
//! 3. **Configuration errors:** Invalid core geometry or unparsable config files.
//! 4. **Simulation errors:** Unknown warrior handles and faulting ticks.
//!
//! Executing `DAT` and reaching the tick budget are not errors; they are reported
//! through [`TickOutcome`](crate::sim::simulator::TickOutcome).

use thiserror::Error;

use crate::isa::opcode::{OpType, Operand};
use crate::sched::queue::WarriorHandle;

/// A 32-bit word that cannot be executed as an instruction.
///
/// Corrupted opcodes are a normal consequence of warriors overwriting each
/// other, so these are reported to the caller rather than guessed around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 4-bit type field holds a value above `CMP`.
    #[error("invalid operation type {raw:#x}")]
    InvalidOpType {
        /// The raw type field.
        raw: u8,
    },

    /// An operand's addressing mode field holds the reserved value 3.
    #[error("invalid addressing mode {mode} on {operand} operand")]
    InvalidMode {
        /// Which operand carried the bad mode.
        operand: Operand,
        /// The raw mode field.
        mode: u8,
    },

    /// An operand that must denote a memory address uses immediate mode.
    #[error("{op} cannot use an immediate {operand} operand as a destination")]
    ImmediateDestination {
        /// The instruction being decoded.
        op: OpType,
        /// The offending operand.
        operand: Operand,
    },
}

/// Failure to build or place a program.
///
/// No partial write to core ever happens when one of these is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested block index is past the last whole block.
    #[error("block {block} out of range; core has {blocks} blocks")]
    BlockOutOfRange {
        /// Requested block index.
        block: usize,
        /// Number of whole blocks in core.
        blocks: usize,
    },

    /// The requested offset does not fall inside a block.
    #[error("offset {offset} out of range for block size {block_size}")]
    OffsetOutOfRange {
        /// Requested offset within the block.
        offset: usize,
        /// Configured block size.
        block_size: usize,
    },

    /// The program does not fit inside a single placement block.
    #[error("program of {size} words does not fit in a block of {block_size}")]
    ProgramTooLarge {
        /// Program length in words.
        size: usize,
        /// Configured block size.
        block_size: usize,
    },

    /// Every placement block is already occupied.
    #[error("no free block left in core")]
    NoFreeBlock,

    /// The buffer holds fewer bytes than the requested word count needs.
    #[error("buffer holds {actual} bytes, {expected} needed")]
    TruncatedBuffer {
        /// Bytes required by the word count.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },

    /// A program stream ended in the middle of a word.
    #[error("program stream ends with {0} stray bytes")]
    TrailingBytes(usize),

    /// Reading the program stream failed.
    #[error("failed to read program: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Core must contain at least one cell.
    #[error("core size must be non-zero")]
    ZeroCoreSize,

    /// Blocks must contain at least one cell.
    #[error("block size must be non-zero")]
    ZeroBlockSize,

    /// A block larger than core leaves no room to place anything.
    #[error("block size {block_size} exceeds core size {core_size}")]
    BlockLargerThanCore {
        /// Configured block size.
        block_size: usize,
        /// Configured core size.
        core_size: usize,
    },

    /// The JSON document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of a simulation-level operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The handle does not name a warrior currently in the queue.
    #[error("no live warrior with handle {0}")]
    UnknownWarrior(WarriorHandle),

    /// The running warrior fetched a word that does not decode.
    ///
    /// The tick had no effect: core, program counters, `elapsed` and the
    /// queue are exactly as before the call.
    #[error("warrior {id} faulted at {addr}: {source}")]
    Fault {
        /// Queue handle of the faulting warrior.
        warrior: WarriorHandle,
        /// Program identifier of the faulting warrior.
        id: u32,
        /// Address of the malformed word.
        addr: usize,
        /// Why decoding failed.
        source: DecodeError,
    },
}

/// Any error the simulator can produce.
#[derive(Debug, Error)]
pub enum MarsError {
    /// See [`DecodeError`].
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// See [`LoadError`].
    #[error(transparent)]
    Load(#[from] LoadError),
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`SimError`].
    #[error(transparent)]
    Sim(#[from] SimError),
}
