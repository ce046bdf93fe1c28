//! SDB ISA - a reference riscv64 machine for the debugger core.
//!
//! The simulator proper owns its own register file and memory. This crate
//! provides a small stand-in with the same observable behavior so the
//! debugger can be driven and tested without one.

mod memory;
mod riscv64;

pub use memory::{MemoryConfig, PhysicalMemory};
pub use riscv64::{Riscv64Registers, REGISTER_NAMES};

use sdb_eval::{GuestMemory, OutOfRange, RegisterFile, UnknownRegister};
use sdb_ir::Word;

/// Registers plus memory of a single-hart riscv64 machine.
#[derive(Debug)]
pub struct Riscv64Machine {
    pub regs: Riscv64Registers,
    pub memory: PhysicalMemory,
}

impl Riscv64Machine {
    /// A zeroed machine with `pc` at the start of memory.
    pub fn new(config: MemoryConfig) -> Self {
        Riscv64Machine {
            regs: Riscv64Registers::new(config.base),
            memory: PhysicalMemory::new(config),
        }
    }
}

impl Default for Riscv64Machine {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

impl RegisterFile for Riscv64Machine {
    fn register_value_of(&self, name: &str) -> Result<Word, UnknownRegister> {
        self.regs.register_value_of(name)
    }
}

impl GuestMemory for Riscv64Machine {
    fn translate_and_read(&self, addr: Word) -> Result<Word, OutOfRange> {
        self.memory.translate_and_read(addr)
    }
}

#[cfg(test)]
mod tests;
