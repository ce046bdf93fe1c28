//! A settable machine for watchpoint tests.

use rustc_hash::FxHashMap;
use sdb_eval::{GuestMemory, OutOfRange, RegisterFile, UnknownRegister};
use sdb_ir::Word;

#[derive(Default)]
pub struct TestMachine {
    registers: FxHashMap<String, Word>,
    memory: FxHashMap<Word, Word>,
}

impl TestMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_register(&mut self, name: &str, value: Word) {
        self.registers.insert(name.to_owned(), value);
    }

    pub fn store(&mut self, addr: Word, value: Word) {
        self.memory.insert(addr, value);
    }
}

impl RegisterFile for TestMachine {
    fn register_value_of(&self, name: &str) -> Result<Word, UnknownRegister> {
        self.registers
            .get(name)
            .copied()
            .ok_or_else(|| UnknownRegister {
                name: name.to_owned(),
            })
    }
}

impl GuestMemory for TestMachine {
    fn translate_and_read(&self, addr: Word) -> Result<Word, OutOfRange> {
        self.memory.get(&addr).copied().ok_or(OutOfRange { addr })
    }
}
