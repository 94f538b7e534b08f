//! # Statistics Tests
//!
//! Counters gathered by the simulation while it ticks.

use mars_core::config::MarsConfig;
use mars_core::isa::OpType;
use mars_core::sim::{Program, Simulation, battle};
use mars_core::stats::SimStats;

#[test]
fn fresh_stats_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.ticks, 0);
    assert!(OpType::ALL.iter().all(|&op| stats.count(op) == 0));
}

#[test]
fn record_counts_by_type() {
    let mut stats = SimStats::default();
    stats.record(OpType::Mov);
    stats.record(OpType::Mov);
    stats.record(OpType::Dat);
    assert_eq!(stats.ticks, 3);
    assert_eq!(stats.count(OpType::Mov), 2);
    assert_eq!(stats.count(OpType::Dat), 1);
    assert_eq!(stats.dat_executions, 1);
}

#[test]
fn battle_populates_lifecycle_counters() {
    let mut s = Simulation::new(MarsConfig::new(20, 10, 10)).unwrap();
    // JMP 1 / DAT #0
    let _ = s
        .load(&Program::from_words(1, vec![0x4400_1000, 0]), 0, 0)
        .unwrap();
    let _ = s.load(&Program::from_words(2, vec![0x4400_0000]), 1, 0).unwrap();

    let _ = battle::run(&mut s).unwrap();
    let stats = s.stats();
    assert_eq!(stats.warriors_loaded, 2);
    assert_eq!(stats.warriors_removed, 1);
    assert_eq!(stats.dat_executions, 1);
    assert_eq!(stats.count(OpType::Jmp), 3);
    assert_eq!(stats.ticks, s.elapsed());
}

#[test]
fn summary_table_renders_counters() {
    let mut stats = SimStats::default();
    stats.record(OpType::Mov);
    stats.record(OpType::Jmp);
    stats.warriors_loaded = 2;

    let table = stats.to_string();
    assert!(table.contains("sim_ticks                2"));
    assert!(table.contains("op.mov"));
    assert!(table.contains("1 (50.00%)"));
    assert!(table.contains("warriors.loaded        2"));
}
