//! The debugger session: one machine, one watchpoint pool.

use crate::config::SdbConfig;
use sdb_eval::{ExprError, Machine};
use sdb_ir::Word;
use sdb_isa::Riscv64Machine;
use sdb_watch::{PollReport, WatchError, Watchpoint, WatchpointId, WatchpointPool, WatchpointTable};

pub struct Debugger<M: Machine> {
    machine: M,
    watchpoints: WatchpointPool,
}

impl<M: Machine> Debugger<M> {
    pub fn new(machine: M) -> Self {
        Debugger {
            machine,
            watchpoints: WatchpointPool::new(),
        }
    }

    /// Evaluate `text` against the current machine state.
    pub fn eval(&self, text: &str) -> Result<Word, ExprError> {
        sdb_eval::expr(text, &self.machine)
    }

    /// Watch `text`. Nothing is created if the pool is full or `text`
    /// does not evaluate right now.
    pub fn watch(&mut self, text: &str) -> Result<WatchpointId, WatchError> {
        self.watchpoints.create(text, &self.machine)
    }

    pub fn unwatch(&mut self, id: WatchpointId) -> Result<Watchpoint, WatchError> {
        self.watchpoints.delete(id)
    }

    pub fn clear_watchpoints(&mut self) {
        self.watchpoints.clear();
    }

    /// Active watchpoints, most recently created first.
    pub fn watchpoints(&self) -> WatchpointTable<'_> {
        self.watchpoints.table()
    }

    pub fn watchpoint(&self, id: WatchpointId) -> Option<&Watchpoint> {
        self.watchpoints.get(id)
    }

    /// Re-check every watchpoint. Call after each executed instruction and
    /// stop if the report is [`triggered`](PollReport::triggered).
    pub fn check_watchpoints(&mut self) -> PollReport {
        let report = self.watchpoints.poll(&self.machine);
        if report.triggered() {
            tracing::info!(changed = report.changes.len(), "watchpoint hit");
        }
        report
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    pub fn into_machine(self) -> M {
        self.machine
    }
}

impl Debugger<Riscv64Machine> {
    /// A session over a fresh reference machine laid out per `config`.
    pub fn with_config(config: &SdbConfig) -> Self {
        Self::new(Riscv64Machine::new(config.memory))
    }

    /// `info r` style register dump.
    pub fn register_dump(&self) -> String {
        self.machine.regs.display()
    }
}

#[cfg(test)]
mod tests;
