//! Program images and placement into core.
//!
//! This module turns raw program binaries into [`Program`] values and copies
//! them into a [`Simulation`]. It provides:
//! 1. **Parsing:** Big-endian 32-bit words from a byte slice or any reader.
//! 2. **Placement:** `base = block_index * block_size + offset`, bounds-checked
//!    before any cell is written.
//! 3. **Registration:** Each placement creates one warrior whose program
//!    counter is `base` and which becomes the next to run.

use std::io::Read;

use tracing::debug;

use crate::common::constants::WORD_BYTES;
use crate::common::error::LoadError;
use crate::sched::queue::WarriorHandle;
use crate::sim::simulator::Simulation;

/// A program image ready to be placed into core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Identifier the warrior is registered under.
    pub id: u32,
    words: Vec<u32>,
}

impl Program {
    /// Wraps already-decoded words.
    pub const fn from_words(id: u32, words: Vec<u32>) -> Self {
        Self { id, words }
    }

    /// Parses `count` big-endian words from the front of `bytes`.
    ///
    /// # Arguments
    ///
    /// * `id` - Program identifier.
    /// * `bytes` - Raw program binary; bytes past `count * 4` are ignored.
    /// * `count` - Number of words to read.
    ///
    /// # Returns
    ///
    /// The program, or [`LoadError::TruncatedBuffer`] if `bytes` is too short.
    pub fn from_be_bytes(id: u32, bytes: &[u8], count: usize) -> Result<Self, LoadError> {
        let expected = count.saturating_mul(WORD_BYTES);
        let body = bytes.get(..expected).ok_or(LoadError::TruncatedBuffer {
            expected,
            actual: bytes.len(),
        })?;
        let words = body
            .chunks_exact(WORD_BYTES)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { id, words })
    }

    /// Reads a whole stream of big-endian words.
    ///
    /// The stream length must be a multiple of four bytes.
    pub fn read_from<R: Read>(id: u32, mut reader: R) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        let _ = reader.read_to_end(&mut bytes)?;
        let stray = bytes.len() % WORD_BYTES;
        if stray != 0 {
            return Err(LoadError::TrailingBytes(stray));
        }
        Self::from_be_bytes(id, &bytes, bytes.len() / WORD_BYTES)
    }

    /// The program's words.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Length in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Simulation {
    /// Copies a program into core and registers a warrior for it.
    ///
    /// # Arguments
    ///
    /// * `program` - The image to copy. It is not retained.
    /// * `block_index` - Placement block, `< core_size / block_size`.
    /// * `offset` - Offset within the block, `< block_size`.
    ///
    /// # Returns
    ///
    /// The new warrior's handle, or [`LoadError::BlockOutOfRange`] /
    /// [`LoadError::OffsetOutOfRange`]. On error core and the queue are untouched.
    pub fn load(
        &mut self,
        program: &Program,
        block_index: usize,
        offset: usize,
    ) -> Result<WarriorHandle, LoadError> {
        let blocks = self.memory.block_count();
        if block_index >= blocks {
            return Err(LoadError::BlockOutOfRange {
                block: block_index,
                blocks,
            });
        }
        let block_size = self.memory.block_size();
        if offset >= block_size {
            return Err(LoadError::OffsetOutOfRange { offset, block_size });
        }
        let base = block_index * block_size + offset;
        let size = program.len();

        // Writes wrap, so a program near the top of core continues at cell 0.
        for (i, &word) in program.words().iter().enumerate() {
            self.memory.write((base + i) as i64, word);
        }
        self.memory.mark_block(block_index);

        let handle = self.warriors.insert(program.id, base);
        self.alive_count += 1;
        self.stats.warriors_loaded += 1;
        debug!(warrior = %handle, id = program.id, base, size, "warrior loaded");
        Ok(handle)
    }
}
