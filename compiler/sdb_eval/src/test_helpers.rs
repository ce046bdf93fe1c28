//! Test helpers for evaluator unit tests.
//!
//! Provides `MockMachine`, a register file and word-addressed memory backed
//! by hash maps, so evaluation can be tested without a simulator.

use rustc_hash::FxHashMap;
use sdb_ir::Word;

use crate::{GuestMemory, OutOfRange, RegisterFile, UnknownRegister};

#[derive(Default)]
pub struct MockMachine {
    registers: FxHashMap<String, Word>,
    memory: FxHashMap<Word, Word>,
}

impl MockMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_register(mut self, name: &str, value: Word) -> Self {
        self.registers.insert(name.to_owned(), value);
        self
    }

    #[must_use]
    pub fn with_word(mut self, addr: Word, value: Word) -> Self {
        self.memory.insert(addr, value);
        self
    }
}

impl RegisterFile for MockMachine {
    fn register_value_of(&self, name: &str) -> Result<Word, UnknownRegister> {
        self.registers
            .get(name)
            .copied()
            .ok_or_else(|| UnknownRegister {
                name: name.to_owned(),
            })
    }
}

impl GuestMemory for MockMachine {
    fn translate_and_read(&self, addr: Word) -> Result<Word, OutOfRange> {
        self.memory.get(&addr).copied().ok_or(OutOfRange { addr })
    }
}
