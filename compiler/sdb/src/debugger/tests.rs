use super::*;
use pretty_assertions::assert_eq;
use sdb_isa::MemoryConfig;

fn debugger() -> Debugger<Riscv64Machine> {
    Debugger::with_config(&SdbConfig {
        memory: MemoryConfig {
            base: 0x8000_0000,
            size: 0x100,
        },
        log_filter: None,
    })
}

#[test]
fn eval_reads_machine_state() {
    let mut dbg = debugger();
    assert_eq!(dbg.machine_mut().regs.set("a0", 5), Ok(()));
    assert_eq!(dbg.eval("$a0 * 2 + 1"), Ok(11));
    assert_eq!(dbg.eval("$pc"), Ok(0x8000_0000));
}

#[test]
fn watch_reports_change_once() {
    let mut dbg = debugger();
    let id = dbg.watch("$a0");
    assert_eq!(id, Ok(WatchpointId::new(0)));

    assert!(dbg.check_watchpoints().is_empty());

    assert_eq!(dbg.machine_mut().regs.set("a0", 1), Ok(()));
    let report = dbg.check_watchpoints();
    assert!(report.triggered());
    assert_eq!(report.changes[0].old, 0);
    assert_eq!(report.changes[0].new, 1);

    assert!(!dbg.check_watchpoints().triggered());
    assert_eq!(dbg.watchpoint(WatchpointId::new(0)).map(|w| w.value), Some(1));
}

#[test]
fn unwatch_and_clear() {
    let mut dbg = debugger();
    assert!(dbg.watch("1").is_ok());
    assert!(dbg.watch("2").is_ok());

    assert!(dbg.unwatch(WatchpointId::new(0)).is_ok());
    assert_eq!(
        dbg.unwatch(WatchpointId::new(0)),
        Err(WatchError::NotFound {
            id: WatchpointId::new(0)
        })
    );

    dbg.clear_watchpoints();
    assert!(dbg.watchpoints().is_empty());
}

#[test]
fn memory_watch_sees_stores() {
    let mut dbg = debugger();
    assert!(dbg.watch("*0x80000008").is_ok());
    assert_eq!(
        dbg.machine_mut().memory.write_word(0x8000_0008, 0x42),
        Ok(())
    );
    let report = dbg.check_watchpoints();
    assert_eq!(report.changes.len(), 1);
    assert_eq!(report.changes[0].new, 0x42);
}

#[test]
fn register_dump_starts_with_pc() {
    let dbg = debugger();
    let dump = dbg.register_dump();
    assert!(dump.starts_with("pc        0x0000000080000000"));
    assert_eq!(dbg.into_machine().regs.pc, 0x8000_0000);
}

#[test]
fn machine_is_borrowable() {
    let dbg = debugger();
    assert_eq!(dbg.machine().memory.size(), 0x100);
}
