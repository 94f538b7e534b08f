//! Core memory.
//!
//! The core is a fixed-size circular array of 32-bit cells shared by every
//! warrior. This module provides:
//! 1. **Cells:** Zero-initialised storage with wraparound read/write.
//! 2. **Blocks:** An occupancy table of `core_size / block_size` entries used
//!    only when placing programs (a trailing partial block is never counted).

use crate::common::addr::{offset, wrap};
use crate::common::error::ConfigError;
use crate::config::MarsConfig;
use crate::isa::opcode::Opcode;

/// The shared memory array plus its placement-block table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreMemory {
    cells: Box<[u32]>,
    blocks: Box<[bool]>,
    block_size: usize,
}

impl CoreMemory {
    /// Allocates a zeroed core.
    ///
    /// # Arguments
    ///
    /// * `core_size` - Number of cells.
    /// * `block_size` - Cells per placement block, at most `core_size`.
    ///
    /// # Returns
    ///
    /// The core, or the [`ConfigError`] a [`MarsConfig`] with this geometry
    /// would fail validation with.
    pub fn new(core_size: usize, block_size: usize) -> Result<Self, ConfigError> {
        MarsConfig::new(core_size, block_size, 0).validate()?;
        Ok(Self {
            cells: vec![0; core_size].into_boxed_slice(),
            blocks: vec![false; core_size / block_size].into_boxed_slice(),
            block_size,
        })
    }

    /// Number of cells in core.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether core has no cells (never true for a validated configuration).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells per placement block.
    #[inline(always)]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Normalises a signed index into `[0, len)`.
    #[inline(always)]
    pub fn wrap(&self, x: i64) -> usize {
        wrap(x, self.cells.len())
    }

    /// Computes `wrap(origin + delta)`.
    #[inline(always)]
    pub fn offset(&self, origin: usize, delta: i32) -> usize {
        offset(origin, delta, self.cells.len())
    }

    /// Reads the cell at `wrap(addr)`.
    #[inline(always)]
    pub fn read(&self, addr: i64) -> u32 {
        self.cells[self.wrap(addr)]
    }

    /// Reads the cell at `wrap(addr)` as a signed value.
    #[inline(always)]
    pub fn read_signed(&self, addr: i64) -> i32 {
        self.read(addr) as i32
    }

    /// Writes `value` to the cell at `wrap(addr)`.
    #[inline(always)]
    pub fn write(&mut self, addr: i64, value: u32) {
        let idx = self.wrap(addr);
        self.cells[idx] = value;
    }

    /// Fetches the cell at `wrap(addr)` as an instruction word.
    #[inline(always)]
    pub fn fetch(&self, addr: usize) -> Opcode {
        Opcode(self.read(addr as i64))
    }

    /// All cells, in address order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Number of whole placement blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Whether a program has been placed in block `index`.
    ///
    /// Out-of-range indices report `false`.
    pub fn is_block_occupied(&self, index: usize) -> bool {
        self.blocks.get(index).copied().unwrap_or(false)
    }

    /// Marks block `index` as occupied. Out-of-range indices are ignored.
    pub fn mark_block(&mut self, index: usize) {
        if let Some(slot) = self.blocks.get_mut(index) {
            *slot = true;
        }
    }

    /// Indices of blocks not yet occupied.
    pub fn free_blocks(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|&(_, &occupied)| !occupied)
            .map(|(i, _)| i)
            .collect()
    }

    /// Cells of block `index`, or `None` past the last whole block.
    pub fn block(&self, index: usize) -> Option<&[u32]> {
        if index >= self.blocks.len() {
            return None;
        }
        let start = index * self.block_size;
        self.cells.get(start..start + self.block_size)
    }
}
