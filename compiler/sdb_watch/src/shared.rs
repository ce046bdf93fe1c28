//! Watchpoint pool shared between callers.
//!
//! `create`, `delete` and `poll` all rewrite the pool's slot lists, so each
//! call holds the lock for its whole duration. Evaluation runs under the
//! lock; it is synchronous and bounded by the token capacity.

use std::sync::Arc;

use parking_lot::Mutex;
use sdb_eval::Machine;

use crate::{PollReport, WatchError, Watchpoint, WatchpointId, WatchpointPool, NR_WP};

pub struct SharedWatchpoints<const N: usize = NR_WP>(Arc<Mutex<WatchpointPool<N>>>);

impl<const N: usize> SharedWatchpoints<N> {
    pub fn new(pool: WatchpointPool<N>) -> Self {
        SharedWatchpoints(Arc::new(Mutex::new(pool)))
    }

    pub fn create<M: Machine + ?Sized>(
        &self,
        expression: &str,
        machine: &M,
    ) -> Result<WatchpointId, WatchError> {
        self.0.lock().create(expression, machine)
    }

    pub fn delete(&self, id: WatchpointId) -> Result<Watchpoint, WatchError> {
        self.0.lock().delete(id)
    }

    pub fn poll<M: Machine + ?Sized>(&self, machine: &M) -> PollReport {
        self.0.lock().poll(machine)
    }

    /// Snapshot of the active list.
    pub fn list(&self) -> Vec<Watchpoint> {
        self.0.lock().list().cloned().collect()
    }

    pub fn counts(&self) -> (usize, usize) {
        self.0.lock().counts()
    }
}

impl<const N: usize> Default for SharedWatchpoints<N> {
    fn default() -> Self {
        Self::new(WatchpointPool::new())
    }
}

impl<const N: usize> Clone for SharedWatchpoints<N> {
    fn clone(&self) -> Self {
        SharedWatchpoints(Arc::clone(&self.0))
    }
}

#[cfg(test)]
mod tests;
