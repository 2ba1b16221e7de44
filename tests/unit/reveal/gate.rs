use std::sync::Arc;
use std::thread;

use super::*;

#[test]
fn with_returns_closure_result() {
    let gate = SyncGate::new(vec![1, 2, 3]);
    let sum: i32 = gate.with(|v| v.iter().sum());
    assert_eq!(sum, 6);
    gate.with(|v| v.push(4));
    assert_eq!(gate.with(|v| v.len()), 4);
}

#[test]
fn concurrent_writers_serialize() {
    let gate = Arc::new(SyncGate::new(0u64));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let gate = gate.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    gate.with(|n| *n += 1);
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
    assert_eq!(gate.with(|n| *n), 4000);
}

#[test]
fn poisoned_gate_recovers() {
    let gate = Arc::new(SyncGate::new(7));
    let g = gate.clone();
    let _ = thread::spawn(move || {
        g.with(|_| panic!("holder panics"));
    })
    .join();
    assert_eq!(gate.with(|n| *n), 7);
}
