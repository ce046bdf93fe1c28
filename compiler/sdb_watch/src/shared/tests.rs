use super::*;
use crate::test_helpers::TestMachine;

#[test]
fn clones_share_one_pool() {
    let machine = TestMachine::new();
    let a: SharedWatchpoints = SharedWatchpoints::default();
    let b = a.clone();

    let id = a.create("1+2", &machine);
    assert_eq!(id, Ok(WatchpointId::new(0)));
    assert_eq!(b.list().len(), 1);
    assert_eq!(b.list()[0].value, 3);

    assert!(b.delete(WatchpointId::new(0)).is_ok());
    assert_eq!(a.counts(), (0, NR_WP));
}

#[test]
fn concurrent_callers_are_serialized() {
    let machine = TestMachine::new();
    let shared: SharedWatchpoints<16> = SharedWatchpoints::new(WatchpointPool::new());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let shared = shared.clone();
            let machine = &machine;
            scope.spawn(move || {
                for _ in 0..50 {
                    if let Ok(id) = shared.create("1", machine) {
                        let _ = shared.poll(machine);
                        assert!(shared.delete(id).is_ok());
                    }
                }
            });
        }
    });

    assert_eq!(shared.counts(), (0, 16));
}

#[test]
fn poll_through_handle() {
    let mut machine = TestMachine::new();
    machine.set_register("sp", 8);
    let shared: SharedWatchpoints = SharedWatchpoints::default();
    assert!(shared.create("$sp", &machine).is_ok());

    machine.set_register("sp", 16);
    let report = shared.poll(&machine);
    assert_eq!(report.changes.len(), 1);
    assert_eq!(report.changes[0].new, 16);
}
