//! SDB Watch - watchpoints re-checked as the guest executes.
//!
//! A watchpoint is an expression plus the value it had when last checked.
//! The stepping loop calls [`WatchpointPool::poll`] after every instruction;
//! any watchpoint whose expression now evaluates differently is reported and
//! its cached value updated.
//!
//! The pool has a fixed number of slots ([`NR_WP`] by default) and never
//! grows. A slot's index is its watchpoint's id, so an id freed by deletion
//! is handed out again by a later `create`.

mod errors;
mod pool;
mod shared;
mod table;

#[cfg(test)]
mod test_helpers;

pub use errors::WatchError;
pub use pool::{WatchpointPool, NR_WP};
pub use shared::SharedWatchpoints;
pub use table::WatchpointTable;

use sdb_eval::ExprError;
use sdb_ir::Word;
use std::fmt;

/// Watchpoint number, equal to the index of the slot it occupies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct WatchpointId(usize);

impl WatchpointId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        WatchpointId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WatchpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An active watchpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Watchpoint {
    pub id: WatchpointId,
    pub expression: String,
    /// Value observed at creation or at the last poll that saw a change.
    pub value: Word,
}

/// One value change seen by a poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchChange {
    pub id: WatchpointId,
    pub expression: String,
    pub old: Word,
    pub new: Word,
}

impl fmt::Display for WatchChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "watchpoint {}: {}", self.id, self.expression)?;
        writeln!(f, "Old value = {:#x}", self.old)?;
        write!(f, "New value = {:#x}", self.new)
    }
}

/// A watchpoint whose expression failed to evaluate during a poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchFailure {
    pub id: WatchpointId,
    pub expression: String,
    pub error: ExprError,
}

/// Outcome of one polling pass, in active-list order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PollReport {
    pub changes: Vec<WatchChange>,
    pub failures: Vec<WatchFailure>,
}

impl PollReport {
    /// Whether any watchpoint changed, i.e. execution should stop.
    pub fn triggered(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.failures.is_empty()
    }
}
