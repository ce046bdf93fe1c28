//! Slot arena behind the watchpoint store.
//!
//! A fixed array of slots, a stack of free slot indices and an ordered list
//! of active ones. Every slot index is in exactly one of `free` and
//! `active`; a slot holds a `Watchpoint` iff its index is active.

use crate::errors::WatchError;
use crate::{PollReport, WatchChange, WatchFailure, Watchpoint, WatchpointId, WatchpointTable};
use sdb_eval::Machine;
use smallvec::SmallVec;

/// Number of watchpoint slots in a default pool.
pub const NR_WP: usize = 32;

pub struct WatchpointPool<const N: usize = NR_WP> {
    slots: [Option<Watchpoint>; N],
    /// Top of the stack is the next slot handed out.
    free: SmallVec<[usize; N]>,
    /// Front is the most recently created watchpoint.
    active: SmallVec<[usize; N]>,
}

impl<const N: usize> WatchpointPool<N> {
    /// A pool with every slot free; slot 0 is handed out first.
    pub fn new() -> Self {
        WatchpointPool {
            slots: std::array::from_fn(|_| None),
            free: (0..N).rev().collect(),
            active: SmallVec::new(),
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// `(active, free)` slot counts. They always sum to the capacity.
    pub fn counts(&self) -> (usize, usize) {
        (self.active.len(), self.free.len())
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Watch `expression`, seeding its cached value with one evaluation.
    ///
    /// Fails without touching the pool if no slot is free or the expression
    /// does not evaluate.
    pub fn create<M: Machine + ?Sized>(
        &mut self,
        expression: &str,
        machine: &M,
    ) -> Result<WatchpointId, WatchError> {
        let Some(&index) = self.free.last() else {
            tracing::error!(capacity = N, "watchpoint pool exhausted");
            return Err(WatchError::PoolExhausted { capacity: N });
        };

        let value = sdb_eval::expr(expression, machine).map_err(|source| WatchError::Eval {
            expression: expression.to_owned(),
            source,
        })?;

        self.free.pop();
        let id = WatchpointId::new(index);
        self.slots[index] = Some(Watchpoint {
            id,
            expression: expression.to_owned(),
            value,
        });
        self.active.insert(0, index);
        tracing::debug!(%id, expression, value, "watchpoint created");
        Ok(id)
    }

    /// Remove watchpoint `id` and return its slot to the free list.
    pub fn delete(&mut self, id: WatchpointId) -> Result<Watchpoint, WatchError> {
        let index = id.index();
        let Some(position) = self.active.iter().position(|&i| i == index) else {
            tracing::debug!(%id, "delete: no such watchpoint");
            return Err(WatchError::NotFound { id });
        };
        let Some(watchpoint) = self.slots[index].take() else {
            return Err(WatchError::NotFound { id });
        };

        self.active.remove(position);
        self.free.push(index);
        tracing::debug!(%id, expression = %watchpoint.expression, "watchpoint deleted");
        Ok(watchpoint)
    }

    /// Delete every watchpoint.
    pub fn clear(&mut self) {
        for index in self.active.drain(..) {
            self.slots[index] = None;
            self.free.push(index);
        }
    }

    /// Re-evaluate every active watchpoint, most recent first.
    ///
    /// A changed value is reported once and becomes the new cached value. A
    /// watchpoint that fails to evaluate keeps its cached value and does not
    /// stop the others from being checked.
    pub fn poll<M: Machine + ?Sized>(&mut self, machine: &M) -> PollReport {
        let mut report = PollReport::default();

        for &index in &self.active {
            let Some(wp) = self.slots[index].as_mut() else {
                continue;
            };
            match sdb_eval::expr(&wp.expression, machine) {
                Ok(new) if new != wp.value => {
                    tracing::debug!(id = %wp.id, old = wp.value, new, "watchpoint changed");
                    report.changes.push(WatchChange {
                        id: wp.id,
                        expression: wp.expression.clone(),
                        old: wp.value,
                        new,
                    });
                    wp.value = new;
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(id = %wp.id, expression = %wp.expression, %error, "watchpoint evaluation failed");
                    report.failures.push(WatchFailure {
                        id: wp.id,
                        expression: wp.expression.clone(),
                        error,
                    });
                }
            }
        }

        report
    }

    pub fn get(&self, id: WatchpointId) -> Option<&Watchpoint> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Active watchpoints in list order (most recently created first).
    pub fn list(&self) -> impl Iterator<Item = &Watchpoint> + '_ {
        self.active
            .iter()
            .filter_map(move |&index| self.slots[index].as_ref())
    }

    /// Listing suitable for printing.
    pub fn table(&self) -> WatchpointTable<'_> {
        WatchpointTable::new(self.list().collect())
    }
}

impl<const N: usize> Default for WatchpointPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> std::fmt::Debug for WatchpointPool<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchpointPool")
            .field("active", &self.active)
            .field("free", &self.free)
            .finish_non_exhaustive()
    }
}
