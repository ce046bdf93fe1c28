//! Watchpoint store errors.

use crate::WatchpointId;
use sdb_eval::ExprError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WatchError {
    /// Every slot is in use. The pool never grows; the caller decides
    /// whether this ends the session.
    #[error("no free watchpoint: all {capacity} slots are in use")]
    PoolExhausted { capacity: usize },
    #[error("watchpoint {id} does not exist")]
    NotFound { id: WatchpointId },
    /// The expression failed its initial evaluation, so nothing was created.
    #[error("cannot watch `{expression}`: {source}")]
    Eval {
        expression: String,
        #[source]
        source: ExprError,
    },
}

impl WatchError {
    /// Exhaustion and token-buffer overflow are hard limits, not bad input.
    pub fn is_fatal(&self) -> bool {
        match self {
            WatchError::PoolExhausted { .. } => true,
            WatchError::Eval { source, .. } => source.is_fatal(),
            WatchError::NotFound { .. } => false,
        }
    }
}
