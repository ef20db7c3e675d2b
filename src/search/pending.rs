//! Pending search table
//!
//! One slot per requester. Every entry carries the sequence number of the
//! submission that created it, so a finishing task can tell whether the slot
//! still belongs to it before clearing it.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

#[derive(Debug)]
struct PendingTask {
    seq: u64,
    query: String,
    cancel_token: CancellationToken,
}

#[derive(Debug)]
pub(crate) struct PendingTable<R> {
    tasks: HashMap<R, PendingTask>,
    /// Next sequence number to hand out (0 is never used)
    next_seq: u64,
}

impl<R: Eq + Hash> PendingTable<R> {
    pub(crate) fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_seq: 1,
        }
    }

    /// Record a new task for `requester`, cancelling whatever it replaces.
    /// Returns the new task's sequence number.
    pub(crate) fn insert(
        &mut self,
        requester: R,
        query: String,
        cancel_token: CancellationToken,
    ) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        let task = PendingTask {
            seq,
            query,
            cancel_token,
        };
        if let Some(previous) = self.tasks.insert(requester, task) {
            previous.cancel_token.cancel();
        }
        seq
    }

    /// Cancel and forget the requester's task. Returns false if there was none.
    pub(crate) fn cancel(&mut self, requester: &R) -> bool {
        match self.tasks.remove(requester) {
            Some(task) => {
                task.cancel_token.cancel();
                true
            }
            None => false,
        }
    }

    /// Clear the slot only if it still holds task `seq`.
    pub(crate) fn remove_if_current(&mut self, requester: &R, seq: u64) -> bool {
        match self.tasks.get(requester) {
            Some(task) if task.seq == seq => {
                self.tasks.remove(requester);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        for (_, task) in self.tasks.drain() {
            task.cancel_token.cancel();
        }
        count
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn contains(&self, requester: &R) -> bool {
        self.tasks.contains_key(requester)
    }

    pub(crate) fn query(&self, requester: &R) -> Option<&str> {
        self.tasks.get(requester).map(|task| task.query.as_str())
    }

    pub(crate) fn current_seq(&self, requester: &R) -> Option<u64> {
        self.tasks.get(requester).map(|task| task.seq)
    }
}

/// Lock the table, recovering it if a holder panicked.
///
/// No operation leaves the map half-updated, so a poisoned table is still consistent.
pub(crate) fn lock_table<R>(table: &Mutex<PendingTable<R>>) -> MutexGuard<'_, PendingTable<R>> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears a task's slot when the task ends, however it ends.
pub(crate) struct CleanupGuard<R: Eq + Hash> {
    table: Arc<Mutex<PendingTable<R>>>,
    requester: R,
    seq: u64,
}

impl<R: Eq + Hash> CleanupGuard<R> {
    pub(crate) fn new(table: Arc<Mutex<PendingTable<R>>>, requester: R, seq: u64) -> Self {
        Self {
            table,
            requester,
            seq,
        }
    }
}

impl<R: Eq + Hash> Drop for CleanupGuard<R> {
    fn drop(&mut self) {
        let mut table = lock_table(&self.table);
        if !table.remove_if_current(&self.requester, self.seq) {
            log::debug!("Search {} slot already cleared or superseded", self.seq);
        }
    }
}

#[cfg(test)]
#[path = "pending_tests.rs"]
mod pending_tests;
