//! Redcode instruction decoder.
//!
//! This module turns a fetched [`Opcode`] into a validated [`Instruction`]. It performs:
//! 1. **Field extraction:** Operation type, both addressing modes and both operand fields.
//! 2. **Mode validation:** Only operands the operation actually reads are checked, so the
//!    unused B field of `JMP` and both fields of `DAT` may hold anything.
//! 3. **Destination validation:** Operands that must denote an address reject immediate
//!    mode, so the executor never has to invent a meaning for `MOV 1 #2`.

use crate::common::error::DecodeError;
use crate::isa::opcode::{AddressingMode, OpType, Opcode, Operand};

/// How an operation uses one of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Use {
    /// Not consulted at all.
    Ignored,
    /// Read for its value; any mode is allowed.
    Value,
    /// Resolved to an address; immediate mode is rejected.
    Address,
}

/// Operand usage for `(A, B)` per operation.
const fn operand_use(op: OpType) -> (Use, Use) {
    match op {
        OpType::Dat => (Use::Ignored, Use::Ignored),
        OpType::Mov | OpType::Add | OpType::Sub => (Use::Value, Use::Address),
        OpType::Jmp => (Use::Address, Use::Ignored),
        OpType::Jmz => (Use::Address, Use::Value),
        OpType::Djz => (Use::Address, Use::Address),
        OpType::Cmp => (Use::Value, Use::Value),
    }
}

/// A decoded, executable instruction.
///
/// Operand fields are kept raw (12 bits); the resolver sign-extends them.
/// For operands the operation ignores, the mode is reported as
/// [`AddressingMode::Relative`] when its raw field is the reserved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Operation to perform.
    pub op: OpType,
    /// Addressing mode of the A operand.
    pub a_mode: AddressingMode,
    /// Addressing mode of the B operand.
    pub b_mode: AddressingMode,
    /// Raw 12-bit A operand field.
    pub a: u16,
    /// Raw 12-bit B operand field.
    pub b: u16,
}

impl Instruction {
    /// Decodes and validates a fetched word.
    ///
    /// # Arguments
    ///
    /// * `op` - The word fetched from core.
    ///
    /// # Returns
    ///
    /// The instruction, or the first [`DecodeError`] found (type, then A, then B).
    pub fn decode(op: Opcode) -> Result<Self, DecodeError> {
        let ty = op.op_type()?;
        let (a_use, b_use) = operand_use(ty);
        let a_mode = decode_mode(ty, op.a_mode_bits(), Operand::A, a_use)?;
        let b_mode = decode_mode(ty, op.b_mode_bits(), Operand::B, b_use)?;
        Ok(Self {
            op: ty,
            a_mode,
            b_mode,
            a: op.a_field(),
            b: op.b_field(),
        })
    }
}

fn decode_mode(
    op: OpType,
    raw: u8,
    operand: Operand,
    usage: Use,
) -> Result<AddressingMode, DecodeError> {
    match usage {
        Use::Ignored => {
            Ok(AddressingMode::decode(raw, operand).unwrap_or(AddressingMode::Relative))
        }
        Use::Value => AddressingMode::decode(raw, operand),
        Use::Address => match AddressingMode::decode(raw, operand)? {
            AddressingMode::Immediate => Err(DecodeError::ImmediateDestination { op, operand }),
            mode => Ok(mode),
        },
    }
}
