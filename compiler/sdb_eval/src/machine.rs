//! Collaborators the evaluator reads machine state through.
//!
//! The register file and the memory subsystem belong to the simulator, not
//! to the debugger. The evaluator only needs a name lookup and a
//! translate-then-read of one word, so those are the whole interface.

use sdb_ir::Word;

/// Register name did not resolve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown register `{name}`")]
pub struct UnknownRegister {
    pub name: String,
}

/// Guest address could not be translated to backing storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("address {addr:#x} is out of range")]
pub struct OutOfRange {
    pub addr: Word,
}

/// Resolves register names (without the `$` sigil) to their current value.
pub trait RegisterFile {
    fn register_value_of(&self, name: &str) -> Result<Word, UnknownRegister>;
}

/// Translates a guest address and reads the word stored there.
pub trait GuestMemory {
    fn translate_and_read(&self, addr: Word) -> Result<Word, OutOfRange>;
}

/// Everything an expression can observe.
pub trait Machine: RegisterFile + GuestMemory {}

impl<T: RegisterFile + GuestMemory + ?Sized> Machine for T {}
