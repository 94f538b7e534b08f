//! # Operand Resolution Tests
//!
//! A ten-cell core holding `core[i] = i - 5` makes every lookup distinguishable.
//! The tables exercise wraparound in both directions for each mode.

use mars_core::common::error::DecodeError;
use mars_core::exec::{resolve_address, resolve_value};
use mars_core::isa::{AddressingMode, OpType, Operand};
use mars_core::memory::CoreMemory;
use rstest::{fixture, rstest};

use AddressingMode::{Immediate, Indirect, Relative};

#[fixture]
fn core() -> CoreMemory {
    let mut core = CoreMemory::new(10, 5).unwrap();
    for i in 0..10i64 {
        core.write(i, (i - 5) as u32);
    }
    core
}

#[rstest]
#[case(5, Immediate, 0x005, 5)]
#[case(2, Immediate, 0x104, 260)]
#[case(9, Immediate, 0xFFF, -1)]
#[case(6, Immediate, 0xF00, -256)]
#[case(3, Relative, 0x002, 0)]
#[case(7, Relative, 0xFFD, -1)]
#[case::relative_over_top(8, Relative, 0x003, -4)]
#[case::relative_under_bottom(2, Relative, 0xFFC, 3)]
#[case(4, Indirect, 0x002, 0)]
#[case(6, Indirect, 0x003, -5)]
#[case::indirect_over_top(9, Indirect, 0xFFE, -4)]
#[case::indirect_under_bottom(1, Indirect, 0xFFF, 1)]
fn value_lookup(
    core: CoreMemory,
    #[case] origin: usize,
    #[case] mode: AddressingMode,
    #[case] raw: u16,
    #[case] expected: i32,
) {
    assert_eq!(resolve_value(&core, origin, mode, raw), expected);
}

#[rstest]
#[case(6, Relative, 0x002, 8)]
#[case(4, Relative, 0xFFD, 1)]
#[case(9, Relative, 0x001, 0)]
#[case(8, Relative, 0x001, 9)]
#[case(2, Relative, 0xFFC, 8)]
#[case(6, Indirect, 0x002, 9)]
#[case(4, Indirect, 0xFFD, 0)]
#[case(9, Indirect, 0x001, 4)]
#[case(8, Indirect, 0x001, 2)]
#[case(3, Indirect, 0xFFC, 7)]
fn address_lookup(
    core: CoreMemory,
    #[case] origin: usize,
    #[case] mode: AddressingMode,
    #[case] raw: u16,
    #[case] expected: usize,
) {
    assert_eq!(
        resolve_address(&core, origin, mode, raw, OpType::Mov, Operand::B),
        Ok(expected)
    );
}

#[rstest]
fn immediate_has_no_address(core: CoreMemory) {
    assert_eq!(
        resolve_address(&core, 0, Immediate, 1, OpType::Jmp, Operand::A),
        Err(DecodeError::ImmediateDestination {
            op: OpType::Jmp,
            operand: Operand::A
        })
    );
}

#[rstest]
fn resolution_does_not_mutate(core: CoreMemory) {
    let before = core.cells().to_vec();
    let first = resolve_value(&core, 6, Indirect, 0x003);
    let second = resolve_value(&core, 6, Indirect, 0x003);
    assert_eq!(first, second);
    assert_eq!(core.cells(), before.as_slice());
}
