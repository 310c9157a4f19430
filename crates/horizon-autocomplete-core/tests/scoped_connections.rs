//! Integration tests for scoped signal connections.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_autocomplete_core::{ConnectionGuard, Signal};

#[derive(Clone, Debug, PartialEq)]
struct Resize {
    width: f32,
    height: f32,
}

// Mirrors how a listener set is acquired on open and released on close.
struct Listener {
    _guards: Vec<ConnectionGuard<Resize>>,
}

#[test]
fn test_listener_set_released_on_drop() {
    let resized = Signal::<Resize>::new();
    let scrolled = Signal::<Resize>::new();
    let hits = Arc::new(AtomicUsize::new(0));

    let listener = {
        let a = hits.clone();
        let b = hits.clone();
        Listener {
            _guards: vec![
                resized.connect_scoped(move |_| {
                    a.fetch_add(1, Ordering::SeqCst);
                }),
                scrolled.connect_scoped(move |_| {
                    b.fetch_add(1, Ordering::SeqCst);
                }),
            ],
        }
    };

    resized.emit(Resize {
        width: 10.0,
        height: 10.0,
    });
    scrolled.emit(Resize {
        width: 10.0,
        height: 10.0,
    });
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    drop(listener);
    assert_eq!(resized.connection_count(), 0);
    assert_eq!(scrolled.connection_count(), 0);

    resized.emit(Resize {
        width: 1.0,
        height: 1.0,
    });
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn test_shared_signal_across_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));

    let total_clone = total.clone();
    signal.connect(move |&n| {
        total_clone.fetch_add(n, Ordering::SeqCst);
    });

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let signal = signal.clone();
            std::thread::spawn(move || signal.emit(n))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(total.load(Ordering::SeqCst), 10);
}

#[test]
fn test_explicit_guard_disconnect() {
    let signal = Signal::<()>::new();
    let guard = signal.connect_scoped(|_| {});
    assert_eq!(signal.connection_count(), 1);

    assert!(guard.disconnect());
    assert_eq!(signal.connection_count(), 0);
}
