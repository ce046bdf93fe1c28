//! Watchpoint listing, `info w` style.

use crate::Watchpoint;
use std::fmt;

/// A snapshot of active watchpoints that prints as a table.
///
/// ```text
/// Num     Type           Value               What
/// 1       watchpoint     0x0000000000000002  $a0 + 1
/// 0       watchpoint     0x0000000080000000  $pc
/// ```
pub struct WatchpointTable<'a> {
    rows: Vec<&'a Watchpoint>,
}

impl<'a> WatchpointTable<'a> {
    pub fn new(rows: Vec<&'a Watchpoint>) -> Self {
        WatchpointTable { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for WatchpointTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return f.write_str("No watchpoints.");
        }
        write!(f, "{:<8}{:<15}{:<20}What", "Num", "Type", "Value")?;
        for wp in &self.rows {
            write!(
                f,
                "\n{:<8}{:<15}{:<20}{}",
                wp.id.index(),
                "watchpoint",
                format!("{:#018x}", wp.value),
                wp.expression
            )?;
        }
        Ok(())
    }
}
