//! Random placement of programs into free blocks.

use rand::Rng;

use crate::common::error::LoadError;
use crate::sched::queue::WarriorHandle;
use crate::sim::loader::Program;
use crate::sim::simulator::Simulation;

/// Loads `program` into a randomly chosen free block at a random offset.
///
/// The offset is drawn so the whole program stays inside the block.
///
/// # Arguments
///
/// * `sim` - Target simulation.
/// * `program` - Image to place.
/// * `rng` - Source of randomness; seed it for reproducible matches.
///
/// # Returns
///
/// The new warrior's handle, [`LoadError::ProgramTooLarge`] if the program is
/// longer than a block, or [`LoadError::NoFreeBlock`] if every block is taken.
pub fn place_randomly<R: Rng + ?Sized>(
    sim: &mut Simulation,
    program: &Program,
    rng: &mut R,
) -> Result<WarriorHandle, LoadError> {
    let block_size = sim.block_size();
    let size = program.len();
    if size > block_size {
        return Err(LoadError::ProgramTooLarge { size, block_size });
    }

    let free = sim.memory().free_blocks();
    if free.is_empty() {
        return Err(LoadError::NoFreeBlock);
    }
    let block = free[rng.gen_range(0..free.len())];
    let max_offset = (block_size - size).min(block_size - 1);
    let offset = rng.gen_range(0..=max_offset);

    sim.load(program, block, offset)
}
