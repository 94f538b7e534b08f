//! Circular warrior ready-queue.
//!
//! Warriors form a single cycle linked through `next`. The queue keeps one
//! entry pointer that is both the most recent insertion point and the warrior
//! that runs next.
//!
//! # Semantics
//!
//! - `insert`: the new warrior is linked directly after the entry and becomes
//!   the entry, so it runs next while older warriors keep their order.
//! - `remove`: the predecessor is relinked to the successor; removing the
//!   entry moves the entry to the successor.
//! - `advance`: the entry moves to its successor (round-robin).
//!
//! Records live in an arena and link by [`WarriorHandle`], so there is no
//! ownership cycle. Handles are never reused: a removed handle stays invalid.

use std::fmt;

use crate::common::error::SimError;

/// Stable handle to a warrior record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WarriorHandle(usize);

impl WarriorHandle {
    /// Arena index behind the handle.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WarriorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One competing program instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warrior {
    /// Program identifier supplied at load time.
    pub id: u32,
    /// Address of the next instruction this warrior executes.
    pub pc: usize,
    next: WarriorHandle,
}

impl Warrior {
    /// Successor in the ready-queue.
    pub const fn next(&self) -> WarriorHandle {
        self.next
    }
}

/// Arena-backed circular ready-queue.
#[derive(Debug, Clone, Default)]
pub struct WarriorQueue {
    slots: Vec<Option<Warrior>>,
    entry: Option<WarriorHandle>,
    len: usize,
}

impl WarriorQueue {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            entry: None,
            len: 0,
        }
    }

    /// Number of live warriors.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no warriors remain.
    pub const fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// The warrior that runs next, if any.
    pub const fn entry(&self) -> Option<WarriorHandle> {
        self.entry
    }

    /// Looks up a live warrior.
    pub fn get(&self, handle: WarriorHandle) -> Option<&Warrior> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    /// Looks up a live warrior mutably.
    pub fn get_mut(&mut self, handle: WarriorHandle) -> Option<&mut Warrior> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    /// Adds a warrior and makes it the next to run.
    ///
    /// # Arguments
    ///
    /// * `id` - Program identifier.
    /// * `pc` - Initial program counter.
    ///
    /// # Returns
    ///
    /// The handle of the new warrior.
    pub fn insert(&mut self, id: u32, pc: usize) -> WarriorHandle {
        let handle = WarriorHandle(self.slots.len());
        let entry = self.entry;
        let next = match entry.and_then(|e| self.get_mut(e)) {
            Some(entry) => std::mem::replace(&mut entry.next, handle),
            None => handle,
        };
        self.slots.push(Some(Warrior { id, pc, next }));
        self.entry = Some(handle);
        self.len += 1;
        handle
    }

    /// Unlinks a warrior from the cycle.
    ///
    /// # Arguments
    ///
    /// * `handle` - The warrior to remove.
    ///
    /// # Returns
    ///
    /// The removed record, or [`SimError::UnknownWarrior`] if the handle is
    /// not live.
    pub fn remove(&mut self, handle: WarriorHandle) -> Result<Warrior, SimError> {
        let successor = self
            .get(handle)
            .map(Warrior::next)
            .ok_or(SimError::UnknownWarrior(handle))?;

        if successor == handle {
            self.entry = None;
        } else {
            let pred = self.predecessor(handle);
            if let Some(p) = self.get_mut(pred) {
                p.next = successor;
            }
            if self.entry == Some(handle) {
                self.entry = Some(successor);
            }
        }

        self.len -= 1;
        self.slots
            .get_mut(handle.0)
            .and_then(Option::take)
            .ok_or(SimError::UnknownWarrior(handle))
    }

    /// Moves the entry pointer to its successor.
    pub fn advance(&mut self) {
        if let Some(next) = self.entry.and_then(|e| self.get(e)).map(Warrior::next) {
            self.entry = Some(next);
        }
    }

    /// Iterates once around the cycle, starting at the entry.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            cursor: self.entry,
            remaining: self.len,
        }
    }

    /// Walks the cycle to find the node whose `next` is `handle`.
    fn predecessor(&self, handle: WarriorHandle) -> WarriorHandle {
        let mut cursor = handle;
        for _ in 0..self.len {
            match self.get(cursor) {
                Some(w) if w.next == handle => return cursor,
                Some(w) => cursor = w.next,
                None => break,
            }
        }
        handle
    }
}

/// Iterator over live warriors in scheduling order.
#[derive(Debug)]
pub struct Iter<'a> {
    queue: &'a WarriorQueue,
    cursor: Option<WarriorHandle>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (WarriorHandle, &'a Warrior);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.cursor?;
        let warrior = self.queue.get(handle)?;
        self.remaining -= 1;
        self.cursor = Some(warrior.next);
        Some((handle, warrior))
    }
}
