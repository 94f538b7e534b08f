//! Single-instruction execution.
//!
//! This module implements the state transition of one decoded instruction
//! against core memory. It performs:
//! 1. **Data movement:** `MOV`, `ADD`, `SUB` with wrapping 32-bit arithmetic.
//! 2. **Control flow:** `JMP`, `JMZ`, `DJZ`, `CMP` program counter updates.
//! 3. **Termination:** `DAT` is reported and leaves core untouched.
//!
//! The scheduler and the warrior's program counter live in the simulation;
//! this module only computes the next program counter.

use crate::common::error::DecodeError;
use crate::exec::resolver::{resolve_address, resolve_value};
use crate::isa::decode::Instruction;
use crate::isa::opcode::{OpType, Operand};
use crate::memory::CoreMemory;

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The warrior continues at `next_pc`.
    Continue {
        /// Normalised address of the next instruction.
        next_pc: usize,
    },
    /// The warrior executed `DAT`.
    Dat,
}

/// Executes `instr`, located at `pc`, against `core`.
///
/// # Arguments
///
/// * `core` - Core memory; written by `MOV`, `ADD`, `SUB` and `DJZ`.
/// * `pc` - Address of the instruction (the origin for every operand).
/// * `instr` - The decoded instruction.
///
/// # Returns
///
/// The effect on the running warrior. Errors only arise for immediate-mode
/// destinations, which [`Instruction::decode`] already rejects.
pub fn execute(
    core: &mut CoreMemory,
    pc: usize,
    instr: &Instruction,
) -> Result<Effect, DecodeError> {
    let Instruction {
        op,
        a_mode,
        b_mode,
        a,
        b,
    } = *instr;
    let next = core.offset(pc, 1);

    let next_pc = match op {
        OpType::Dat => return Ok(Effect::Dat),
        OpType::Mov => {
            let value = resolve_value(core, pc, a_mode, a);
            let dest = resolve_address(core, pc, b_mode, b, op, Operand::B)?;
            core.write(dest as i64, value as u32);
            next
        }
        OpType::Add | OpType::Sub => {
            let value = resolve_value(core, pc, a_mode, a) as u32;
            let dest = resolve_address(core, pc, b_mode, b, op, Operand::B)?;
            let current = core.read(dest as i64);
            let result = if op == OpType::Add {
                current.wrapping_add(value)
            } else {
                current.wrapping_sub(value)
            };
            core.write(dest as i64, result);
            next
        }
        OpType::Jmp => resolve_address(core, pc, a_mode, a, op, Operand::A)?,
        OpType::Jmz => {
            if resolve_value(core, pc, b_mode, b) == 0 {
                resolve_address(core, pc, a_mode, a, op, Operand::A)?
            } else {
                next
            }
        }
        OpType::Djz => {
            let dest = resolve_address(core, pc, b_mode, b, op, Operand::B)?;
            let result = core.read(dest as i64).wrapping_sub(1);
            core.write(dest as i64, result);
            // The jump target is resolved after the decrement; it may read the cell just written.
            if result == 0 {
                resolve_address(core, pc, a_mode, a, op, Operand::A)?
            } else {
                next
            }
        }
        OpType::Cmp => {
            if resolve_value(core, pc, a_mode, a) == resolve_value(core, pc, b_mode, b) {
                core.offset(pc, 2)
            } else {
                next
            }
        }
    };

    Ok(Effect::Continue { next_pc })
}
