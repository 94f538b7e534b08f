//! Instruction Disassembler for Redcode.
//!
//! Converts 32-bit opcode words into Redcode text for debug tracing,
//! warrior listings, and test diagnostics.
//!
//! # Notation
//!
//! - `#n` immediate, `n` relative, `@n` indirect
//! - `DAT` shows its B field only, `JMP` its A field only
//! - Words that do not decode render as `.word 0x........`
//!
//! # Usage
//!
//! ```
//! use mars_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x19FFF002), "MOV @-1 2");
//! assert_eq!(disassemble(0x22004FFC), "ADD #4 @-4");
//! ```

use std::fmt::{self, Write};

use crate::isa::decode::Instruction;
use crate::isa::opcode::{AddressingMode, OpType, Opcode, sign_extend_12};

/// Words per row of a hex dump.
pub const DUMP_WORDS_PER_ROW: usize = 8;

struct Field(AddressingMode, u16);

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.sigil(), sign_extend_12(self.1))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = Field(self.a_mode, self.a);
        let b = Field(self.b_mode, self.b);
        match self.op {
            OpType::Dat => write!(f, "DAT {b}"),
            OpType::Jmp => write!(f, "JMP {a}"),
            op => write!(f, "{op} {a} {b}"),
        }
    }
}

/// Disassembles a single word.
///
/// Returns Redcode like `"MOV @-1 2"`, or `".word 0x1d000000"` for words
/// that do not decode.
pub fn disassemble(word: u32) -> String {
    Instruction::decode(Opcode(word))
        .map_or_else(|_| format!(".word {word:#010x}"), |instr| instr.to_string())
}

/// Produces an address-annotated listing of consecutive words.
///
/// # Arguments
///
/// * `words` - The words to list.
/// * `base` - Address of the first word, used for the left column.
///
/// # Returns
///
/// One line per word: address, raw hex, and disassembly.
pub fn listing(words: &[u32], base: usize) -> String {
    let mut out = String::new();
    for (i, &word) in words.iter().enumerate() {
        let _ = writeln!(out, "{:05}: {word:08x}  {}", base + i, disassemble(word));
    }
    out
}

/// Hex dump of consecutive words, eight per row.
pub fn hex_dump(words: &[u32]) -> String {
    let mut out = String::new();
    for row in words.chunks(DUMP_WORDS_PER_ROW) {
        let line: Vec<String> = row.iter().map(|w| format!("{w:08x}")).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}
