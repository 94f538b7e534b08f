//! Opcode Layout Constants.
//!
//! This module defines the packed instruction layout shared by the decoder, the
//! encoder used by tools and tests, and the program reader. It includes:
//! 1. **Field Widths:** Bit widths of the type, mode and operand fields.
//! 2. **Shifts and Masks:** Positions of each field in the 32-bit word (MSB first).
//! 3. **Operand Range:** Bounds of the signed 12-bit operand encoding.
//!
//! Layout, most significant bit first:
//!
//! ```text
//!  31    28 27  26 25  24 23          12 11           0
//! +--------+------+------+--------------+--------------+
//! |  type  |a_mode|b_mode|  a operand   |  b operand   |
//! +--------+------+------+--------------+--------------+
//! ```

/// Number of bytes in one opcode word of a program binary.
pub const WORD_BYTES: usize = 4;

/// Width of an operand field in bits.
pub const OPERAND_WIDTH: u32 = 12;

/// Bit mask for an operand field once shifted down.
pub const OPERAND_MASK: u32 = (1 << OPERAND_WIDTH) - 1;

/// Sign bit of an operand field.
pub const OPERAND_SIGN_BIT: u32 = 1 << (OPERAND_WIDTH - 1);

/// Value subtracted from a field with the sign bit set (`2^12`).
pub const OPERAND_MODULUS: i32 = 1 << OPERAND_WIDTH;

/// Smallest value an operand field can denote.
pub const OPERAND_MIN: i32 = -(1 << (OPERAND_WIDTH - 1));

/// Largest value an operand field can denote.
pub const OPERAND_MAX: i32 = (1 << (OPERAND_WIDTH - 1)) - 1;

/// Bit position of the B operand field (bits 0-11).
pub const B_OFFSET: u32 = 0;

/// Bit position of the A operand field (bits 12-23).
pub const A_OFFSET: u32 = 12;

/// Bit position of the B addressing mode (bits 24-25).
pub const B_MODE_OFFSET: u32 = 24;

/// Bit position of the A addressing mode (bits 26-27).
pub const A_MODE_OFFSET: u32 = 26;

/// Bit position of the operation type (bits 28-31).
pub const TYPE_OFFSET: u32 = 28;

/// Bit mask for an addressing mode once shifted down.
pub const MODE_MASK: u32 = 0x3;

/// Bit mask for the operation type once shifted down.
pub const TYPE_MASK: u32 = 0xF;
