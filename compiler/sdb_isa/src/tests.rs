use super::*;
use pretty_assertions::assert_eq;

#[test]
fn machine_starts_at_memory_base() {
    let machine = Riscv64Machine::new(MemoryConfig {
        base: 0x1000,
        size: 32,
    });
    assert_eq!(machine.register_value_of("pc"), Ok(0x1000));
    assert_eq!(machine.translate_and_read(0x1000), Ok(0));
}

#[test]
fn expressions_see_registers_and_memory() {
    let mut machine = Riscv64Machine::new(MemoryConfig {
        base: 0x8000_0000,
        size: 64,
    });
    assert_eq!(machine.regs.set("a0", 0x8000_0010), Ok(()));
    assert_eq!(machine.memory.write_word(0x8000_0010, 0xdead_beef), Ok(()));

    assert_eq!(sdb_eval::expr("*$a0", &machine), Ok(0xdead_beef));
    assert_eq!(sdb_eval::expr("$pc == 0x80000000", &machine), Ok(1));
}

#[test]
fn reading_below_base_is_a_bad_address() {
    let machine = Riscv64Machine::new(MemoryConfig {
        base: 0x8000_0000,
        size: 64,
    });
    let err = sdb_eval::expr("*0", &machine);
    assert!(matches!(
        err,
        Err(sdb_eval::ExprError::Eval(ref e))
            if e.kind == sdb_eval::EvalErrorKind::BadAddress { addr: 0 }
    ));
}
