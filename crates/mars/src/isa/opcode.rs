//! Opcode encoding and field extraction.
//!
//! An [`Opcode`] is an immutable 32-bit word. Fields are read through accessor
//! methods rather than by reinterpreting memory, so nothing here depends on the
//! host byte order.

use std::fmt;

use crate::common::constants::{
    A_MODE_OFFSET, A_OFFSET, B_MODE_OFFSET, B_OFFSET, MODE_MASK, OPERAND_MASK, OPERAND_MODULUS,
    OPERAND_SIGN_BIT, TYPE_MASK, TYPE_OFFSET,
};
use crate::common::error::DecodeError;

/// Interprets a 12-bit operand field as two's complement.
///
/// Only the low 12 bits of `raw` are considered. The result lies in
/// `[-2048, 2047]`: fields below `0x800` are returned unchanged and fields
/// with bit 11 set have `4096` subtracted.
#[inline(always)]
pub const fn sign_extend_12(raw: u16) -> i32 {
    let field = raw as u32 & OPERAND_MASK;
    if field & OPERAND_SIGN_BIT != 0 {
        field as i32 - OPERAND_MODULUS
    } else {
        field as i32
    }
}

/// Truncates a signed value to a 12-bit operand field.
#[inline(always)]
pub const fn operand_field(value: i32) -> u16 {
    (value as u32 & OPERAND_MASK) as u16
}

/// Operation type (bits 28-31).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpType {
    /// Non-executable data. Executing it ends the warrior.
    Dat = 0,
    /// Copy the A value into the B address.
    Mov = 1,
    /// Add the A value to the B cell.
    Add = 2,
    /// Subtract the A value from the B cell.
    Sub = 3,
    /// Jump to the A address.
    Jmp = 4,
    /// Jump to the A address if the B value is zero.
    Jmz = 5,
    /// Decrement the B cell and jump to the A address if it reached zero.
    Djz = 6,
    /// Skip the next instruction if the A and B values are equal.
    Cmp = 7,
}

impl OpType {
    /// All operation types in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Dat,
        Self::Mov,
        Self::Add,
        Self::Sub,
        Self::Jmp,
        Self::Jmz,
        Self::Djz,
        Self::Cmp,
    ];

    /// Redcode mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Dat => "DAT",
            Self::Mov => "MOV",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Jmp => "JMP",
            Self::Jmz => "JMZ",
            Self::Djz => "DJZ",
            Self::Cmp => "CMP",
        }
    }

    /// Index into per-operation tables such as statistics counters.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for OpType {
    type Error = DecodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(DecodeError::InvalidOpType { raw })
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Addressing mode of one operand (two bits each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// `#n`: the literal value `n`.
    Immediate = 0,
    /// `n`: the cell at `origin + n`.
    Relative = 1,
    /// `@n`: the cell at `origin + core[origin + n]`.
    Indirect = 2,
}

impl AddressingMode {
    /// Redcode prefix for this mode.
    pub const fn sigil(self) -> &'static str {
        match self {
            Self::Immediate => "#",
            Self::Relative => "",
            Self::Indirect => "@",
        }
    }
}

/// Which of the two operands a field or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The first (source) operand.
    A,
    /// The second (destination) operand.
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

impl AddressingMode {
    /// Decodes a raw two-bit mode field for the given operand.
    ///
    /// # Arguments
    ///
    /// * `raw` - The mode field (only values 0-2 are defined).
    /// * `operand` - Which operand the field belongs to, for error reporting.
    ///
    /// # Returns
    ///
    /// The mode, or [`DecodeError::InvalidMode`] for the reserved value 3.
    pub const fn decode(raw: u8, operand: Operand) -> Result<Self, DecodeError> {
        match raw {
            0 => Ok(Self::Immediate),
            1 => Ok(Self::Relative),
            2 => Ok(Self::Indirect),
            mode => Err(DecodeError::InvalidMode { operand, mode }),
        }
    }
}

/// A packed 32-bit instruction word: `type[4] | a_mode[2] | b_mode[2] | a[12] | b[12]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opcode(pub u32);

impl Opcode {
    /// Packs an instruction from its fields.
    ///
    /// Operand values outside `[-2048, 2047]` are truncated to 12 bits.
    pub const fn encode(
        op: OpType,
        a_mode: AddressingMode,
        b_mode: AddressingMode,
        a: i32,
        b: i32,
    ) -> Self {
        Self(
            (op as u32) << TYPE_OFFSET
                | (a_mode as u32) << A_MODE_OFFSET
                | (b_mode as u32) << B_MODE_OFFSET
                | (operand_field(a) as u32) << A_OFFSET
                | (operand_field(b) as u32) << B_OFFSET,
        )
    }

    /// Returns the raw word.
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Raw operation type field (bits 28-31).
    #[inline(always)]
    pub const fn op_type_bits(self) -> u8 {
        ((self.0 >> TYPE_OFFSET) & TYPE_MASK) as u8
    }

    /// Raw A addressing mode field (bits 26-27).
    #[inline(always)]
    pub const fn a_mode_bits(self) -> u8 {
        ((self.0 >> A_MODE_OFFSET) & MODE_MASK) as u8
    }

    /// Raw B addressing mode field (bits 24-25).
    #[inline(always)]
    pub const fn b_mode_bits(self) -> u8 {
        ((self.0 >> B_MODE_OFFSET) & MODE_MASK) as u8
    }

    /// Raw A operand field (bits 12-23).
    #[inline(always)]
    pub const fn a_field(self) -> u16 {
        ((self.0 >> A_OFFSET) & OPERAND_MASK) as u16
    }

    /// Raw B operand field (bits 0-11).
    #[inline(always)]
    pub const fn b_field(self) -> u16 {
        ((self.0 >> B_OFFSET) & OPERAND_MASK) as u16
    }

    /// Signed value of the A operand.
    #[inline(always)]
    pub const fn a_value(self) -> i32 {
        sign_extend_12(self.a_field())
    }

    /// Signed value of the B operand.
    #[inline(always)]
    pub const fn b_value(self) -> i32 {
        sign_extend_12(self.b_field())
    }

    /// Decodes the operation type.
    pub fn op_type(self) -> Result<OpType, DecodeError> {
        OpType::try_from(self.op_type_bits())
    }
}

impl From<u32> for Opcode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Opcode> for u32 {
    fn from(op: Opcode) -> Self {
        op.0
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode({:#010x})", self.0)
    }
}
