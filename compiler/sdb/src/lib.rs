//! SDB - the expression and watchpoint core of a simple debugger.
//!
//! Layering, bottom up:
//!
//! - `sdb_ir`: words, spans, tokens and operators
//! - `sdb_lexer`: ordered rule table, `*` disambiguation
//! - `sdb_eval`: recursive evaluation against a [`Machine`]
//! - `sdb_watch`: the fixed-capacity watchpoint pool
//! - `sdb_isa`: a reference riscv64 register file and memory
//!
//! [`Debugger`] ties them together for a REPL or a stepping loop.

mod config;
mod debugger;

pub use config::{ConfigError, SdbConfig};
pub use debugger::Debugger;

pub use sdb_eval::{expr, EvalError, EvalErrorKind, ExprError, Machine};
pub use sdb_ir::Word;
pub use sdb_isa::{MemoryConfig, Riscv64Machine};
pub use sdb_lexer::{LexError, LexErrorKind};
pub use sdb_watch::{
    PollReport, WatchChange, WatchError, WatchFailure, Watchpoint, WatchpointId, WatchpointTable,
    NR_WP,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber.
///
/// Only does anything when `config` carries a log filter (taken from
/// `RUST_LOG` by [`SdbConfig::from_env`]). Later calls are no-ops.
pub fn init_tracing(config: &SdbConfig) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if let Some(directives) = config.log_filter.as_deref() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::new(directives))
                .init();
        }
    });
}
