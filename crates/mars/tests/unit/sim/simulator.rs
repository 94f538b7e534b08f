//! # Tick Semantics Tests
//!
//! End conditions, `DAT`, faults and round-robin order at the simulation level.

use mars_core::common::error::{ConfigError, DecodeError, SimError};
use mars_core::config::MarsConfig;
use mars_core::isa::Operand;
use mars_core::sim::{EndReason, Program, Simulation, TickOutcome};

use crate::common::harness::{HARNESS_ID, TestContext};

/// `JMP 0`: a warrior that spins in place forever.
const SPIN: u32 = 0x4400_0000;

#[test]
fn new_simulation_is_empty() {
    let s = Simulation::new(MarsConfig::new(256, 64, 100)).unwrap();
    assert_eq!(s.core_size(), 256);
    assert_eq!(s.block_size(), 64);
    assert_eq!(s.duration(), 100);
    assert_eq!(s.elapsed(), 0);
    assert_eq!(s.alive_count(), 0);
    assert_eq!(s.next_warrior(), None);
    assert!(s.memory().cells().iter().all(|&c| c == 0));
    assert_eq!(s.memory().free_blocks(), vec![0, 1, 2, 3]);
}

#[test]
fn partial_trailing_block_is_not_counted() {
    let s = Simulation::new(MarsConfig::new(21, 5, 50)).unwrap();
    assert_eq!(s.memory().block_count(), 4);
}

#[test]
fn invalid_geometry_is_rejected() {
    assert!(matches!(
        Simulation::new(MarsConfig::new(0, 1, 1)),
        Err(ConfigError::ZeroCoreSize)
    ));
    assert!(matches!(
        Simulation::new(MarsConfig::new(4, 8, 1)),
        Err(ConfigError::BlockLargerThanCore { .. })
    ));
}

#[test]
fn tick_on_empty_queue_does_nothing() {
    let mut s = Simulation::new(MarsConfig::new(10, 5, 100)).unwrap();
    assert_eq!(s.tick(), Ok(TickOutcome::Ended(EndReason::NoWarriors)));
    assert_eq!(s.elapsed(), 0);
}

#[test]
fn duration_stops_execution() {
    let mut ctx = TestContext::with_config(MarsConfig::new(5, 5, 3)).with_core(&[SPIN]);
    for _ in 0..3 {
        assert!(matches!(ctx.step(), TickOutcome::Executed { .. }));
    }
    assert_eq!(ctx.step(), TickOutcome::Ended(EndReason::DurationReached));
    assert_eq!(ctx.sim.elapsed(), 3);
    assert!(ctx.sim.is_over());
}

#[test]
fn dat_consumes_the_tick_and_keeps_pc() {
    let mut ctx = TestContext::new(5).with_core(&[0, 0, 0x0000_0042]).at(2);
    let outcome = ctx.step();
    assert_eq!(
        outcome,
        TickOutcome::DatExecuted {
            warrior: ctx.warrior,
            id: HARNESS_ID,
            addr: 2
        }
    );
    assert_eq!(ctx.pc(), 2);
    assert_eq!(ctx.sim.elapsed(), 1);
    assert_eq!(ctx.sim.alive_count(), 1);
    assert_eq!(ctx.sim.stats().dat_executions, 1);
}

#[test]
fn fault_leaves_state_untouched() {
    // MOV 0 #0: immediate destination.
    let mut ctx = TestContext::new(5).with_core(&[0, 0x1400_0000]).at(1);
    let before = ctx.cells();
    let err = ctx.sim.tick().unwrap_err();
    assert_eq!(
        err,
        SimError::Fault {
            warrior: ctx.warrior,
            id: HARNESS_ID,
            addr: 1,
            source: DecodeError::ImmediateDestination {
                op: mars_core::isa::OpType::Mov,
                operand: Operand::B
            }
        }
    );
    assert_eq!(ctx.cells(), before);
    assert_eq!(ctx.pc(), 1);
    assert_eq!(ctx.sim.elapsed(), 0);
    assert_eq!(ctx.sim.next_warrior(), Some(ctx.warrior));
    assert_eq!(ctx.sim.stats().faults, 1);
}

#[test]
fn warriors_alternate() {
    let mut s = Simulation::new(MarsConfig::new(20, 10, 100)).unwrap();
    let spin = Program::from_words(1, vec![SPIN]);
    let a = s.load(&spin, 0, 0).unwrap();
    let b = s.load(&Program::from_words(2, vec![SPIN]), 1, 0).unwrap();

    let mut order = Vec::new();
    for _ in 0..4 {
        match s.tick().unwrap() {
            TickOutcome::Executed { warrior, .. } => order.push(warrior),
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(order, vec![b, a, b, a]);
    assert_eq!(s.elapsed(), 4);
}

#[test]
fn removal_updates_alive_count() {
    let mut ctx = TestContext::new(5);
    let w = ctx.sim.remove_warrior(ctx.warrior).unwrap();
    assert_eq!(w.id, HARNESS_ID);
    assert_eq!(ctx.sim.alive_count(), 0);
    assert_eq!(
        ctx.sim.remove_warrior(ctx.warrior),
        Err(SimError::UnknownWarrior(ctx.warrior))
    );
    assert_eq!(ctx.sim.tick(), Ok(TickOutcome::Ended(EndReason::NoWarriors)));
}

#[test]
fn set_pc_wraps() {
    let ctx = TestContext::new(5).at(-1);
    assert_eq!(ctx.pc(), 4);
    let ctx = TestContext::new(5).at(12);
    assert_eq!(ctx.pc(), 2);
}

#[test]
fn run_until_event_stops_at_dat() {
    // JMP 1, then DAT.
    let mut ctx = TestContext::new(5).with_core(&[0x4400_1000, 0]);
    let outcome = ctx.sim.run_until_event().unwrap();
    assert!(matches!(outcome, TickOutcome::DatExecuted { addr: 1, .. }));
    assert_eq!(ctx.sim.elapsed(), 2);
}
