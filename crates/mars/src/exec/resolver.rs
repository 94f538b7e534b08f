//! Operand resolution.
//!
//! Given the address of the instruction being executed (the origin), an
//! addressing mode and a raw 12-bit field, compute either the value the
//! operand denotes or the address it denotes.
//!
//! Indirect mode takes two hops, both measured from the origin: the first
//! finds a pointer cell at `origin + v`; that cell's signed contents are then
//! taken as a second offset from the *origin*, not from the pointer cell.
//!
//! Both functions only read core and are therefore idempotent for an
//! unchanged core.

use crate::common::error::DecodeError;
use crate::isa::opcode::{AddressingMode, OpType, Operand, sign_extend_12};
use crate::memory::CoreMemory;

/// Address of the pointer cell's target for indirect mode.
#[inline(always)]
fn indirect_target(core: &CoreMemory, origin: usize, v: i32) -> usize {
    let hop = core.offset(origin, v);
    core.offset(origin, core.read_signed(hop as i64))
}

/// Value denoted by an operand.
///
/// # Arguments
///
/// * `core` - Core memory to read from.
/// * `origin` - Address of the executing instruction.
/// * `mode` - Addressing mode of the operand.
/// * `raw` - Raw 12-bit operand field.
///
/// # Returns
///
/// The literal for immediate mode, otherwise the signed contents of the
/// referenced cell.
pub fn resolve_value(core: &CoreMemory, origin: usize, mode: AddressingMode, raw: u16) -> i32 {
    let v = sign_extend_12(raw);
    match mode {
        AddressingMode::Immediate => v,
        AddressingMode::Relative => core.read_signed(core.offset(origin, v) as i64),
        AddressingMode::Indirect => core.read_signed(indirect_target(core, origin, v) as i64),
    }
}

/// Address denoted by an operand.
///
/// # Arguments
///
/// * `core` - Core memory to read from.
/// * `origin` - Address of the executing instruction.
/// * `mode` - Addressing mode of the operand.
/// * `raw` - Raw 12-bit operand field.
/// * `op` / `operand` - Identify the caller in the error for immediate mode.
///
/// # Returns
///
/// The normalised address, or [`DecodeError::ImmediateDestination`] since a
/// literal has no location.
pub fn resolve_address(
    core: &CoreMemory,
    origin: usize,
    mode: AddressingMode,
    raw: u16,
    op: OpType,
    operand: Operand,
) -> Result<usize, DecodeError> {
    let v = sign_extend_12(raw);
    match mode {
        AddressingMode::Immediate => Err(DecodeError::ImmediateDestination { op, operand }),
        AddressingMode::Relative => Ok(core.offset(origin, v)),
        AddressingMode::Indirect => Ok(indirect_target(core, origin, v)),
    }
}
