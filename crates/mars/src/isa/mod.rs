//! Redcode instruction set.
//!
//! This module covers everything about the 32-bit instruction word:
//! 1. **Opcode:** The packed value type and its field accessors.
//! 2. **Decode:** Validation of a fetched word into an executable [`Instruction`](decode::Instruction).
//! 3. **Disassembly:** Redcode text for instructions, listings and core dumps.

/// Decoding and validation of fetched words.
pub mod decode;
/// Instruction disassembler for tracing, listings and diagnostics.
pub mod disasm;
/// Packed opcode layout, operation types and addressing modes.
pub mod opcode;

pub use decode::Instruction;
pub use opcode::{AddressingMode, OpType, Opcode, Operand};
