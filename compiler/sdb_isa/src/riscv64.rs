//! riscv64 general-purpose registers and program counter.

use rustc_hash::FxHashMap;
use sdb_eval::{RegisterFile, UnknownRegister};
use sdb_ir::Word;
use std::fmt::Write as _;
use std::sync::LazyLock;

/// ABI names of `x0..x31`, in register-number order.
pub const REGISTER_NAMES: [&str; 32] = [
    "$0", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4", "a5",
    "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4", "t5",
    "t6",
];

static NAME_TO_INDEX: LazyLock<FxHashMap<&'static str, usize>> = LazyLock::new(|| {
    let mut map: FxHashMap<&'static str, usize> = REGISTER_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, i))
        .collect();
    // `$0` arrives without its sigil once the lexer strips the leading `$`.
    map.insert("0", 0);
    map
});

/// Architectural register state of one hart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Riscv64Registers {
    pub gpr: [Word; 32],
    pub pc: Word,
}

impl Riscv64Registers {
    pub fn new(pc: Word) -> Self {
        Riscv64Registers { gpr: [0; 32], pc }
    }

    /// Register number for an ABI name, `None` for `pc` and unknown names.
    pub fn index_of(name: &str) -> Option<usize> {
        NAME_TO_INDEX.get(name).copied()
    }

    /// Write `value` to the named register. Writes to `$0` are discarded.
    pub fn set(&mut self, name: &str, value: Word) -> Result<(), UnknownRegister> {
        if name == "pc" {
            self.pc = value;
            return Ok(());
        }
        match Self::index_of(name) {
            Some(0) => Ok(()),
            Some(i) => {
                self.gpr[i] = value;
                Ok(())
            }
            None => Err(UnknownRegister {
                name: name.to_owned(),
            }),
        }
    }

    /// Register dump, one line per register, `pc` first.
    pub fn display(&self) -> String {
        let mut out = String::new();
        let rows = std::iter::once(("pc", self.pc))
            .chain(REGISTER_NAMES.iter().copied().zip(self.gpr.iter().copied()));
        for (name, value) in rows {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{name:<10}{value:#018x}     {value}");
        }
        out
    }
}

impl RegisterFile for Riscv64Registers {
    fn register_value_of(&self, name: &str) -> Result<Word, UnknownRegister> {
        if name == "pc" {
            return Ok(self.pc);
        }
        match Self::index_of(name) {
            Some(i) => Ok(self.gpr[i]),
            None => {
                tracing::debug!(name, "unknown register");
                Err(UnknownRegister {
                    name: name.to_owned(),
                })
            }
        }
    }
}
