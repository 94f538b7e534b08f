//! # Ready-Queue Tests
//!
//! Insertion puts the newest warrior at the front while older warriors keep
//! their relative order; removal and rotation preserve the cycle.

use mars_core::common::error::SimError;
use mars_core::sched::{WarriorHandle, WarriorQueue};

/// Ids in scheduling order, starting at the entry.
fn order(q: &WarriorQueue) -> Vec<u32> {
    q.iter().map(|(_, w)| w.id).collect()
}

/// Queue holding warriors 1..=4 inserted in order, plus their handles.
fn four() -> (WarriorQueue, Vec<WarriorHandle>) {
    let mut q = WarriorQueue::new();
    let handles = (1..=4).map(|id| q.insert(id, 0)).collect();
    (q, handles)
}

#[test]
fn single_warrior_points_at_itself() {
    let mut q = WarriorQueue::new();
    let a = q.insert(1, 0);
    assert_eq!(q.get(a).unwrap().next(), a);
    q.advance();
    assert_eq!(q.entry(), Some(a));
}

#[test]
fn newest_is_always_next() {
    let mut q = WarriorQueue::new();
    for id in 1..=4 {
        let h = q.insert(id, 0);
        assert_eq!(q.entry(), Some(h));
    }
    assert_eq!(order(&q), vec![4, 1, 2, 3]);
}

#[test]
fn advance_rotates_through_all() {
    let (mut q, _) = four();
    let mut seen = Vec::new();
    for _ in 0..5 {
        let h = q.entry().unwrap();
        seen.push(q.get(h).unwrap().id);
        q.advance();
    }
    assert_eq!(seen, vec![4, 1, 2, 3, 4]);
}

#[test]
fn remove_middle() {
    let (mut q, h) = four();
    let removed = q.remove(h[1]).unwrap();
    assert_eq!(removed.id, 2);
    assert_eq!(order(&q), vec![4, 1, 3]);
    assert_eq!(q.len(), 3);
}

#[test]
fn remove_entry_moves_to_successor() {
    let (mut q, h) = four();
    let _ = q.remove(h[3]).unwrap();
    assert_eq!(q.entry(), Some(h[0]));
    assert_eq!(order(&q), vec![1, 2, 3]);
}

#[test]
fn remove_only_empties() {
    let mut q = WarriorQueue::new();
    let a = q.insert(7, 3);
    let _ = q.remove(a).unwrap();
    assert!(q.is_empty());
    assert_eq!(q.entry(), None);
    assert_eq!(q.iter().count(), 0);
}

#[test]
fn removed_handle_is_not_reused() {
    let mut q = WarriorQueue::new();
    let a = q.insert(1, 0);
    let _ = q.remove(a).unwrap();
    let b = q.insert(2, 0);
    assert_ne!(a, b);
    assert!(q.get(a).is_none());
    assert_eq!(q.remove(a), Err(SimError::UnknownWarrior(a)));
}

#[test]
fn insert_after_removal_keeps_cycle() {
    let (mut q, h) = four();
    let _ = q.remove(h[2]).unwrap();
    let _ = q.insert(5, 0);
    assert_eq!(order(&q), vec![5, 1, 2, 4]);
}
