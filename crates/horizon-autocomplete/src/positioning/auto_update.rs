//! Keeping an open panel positioned while layout changes.
//!
//! The host owns a [`LayoutSignals`] and emits a [`LayoutSnapshot`] whenever
//! something that can move the reference element happens. An [`AutoUpdate`]
//! subscribes to all three channels while the panel is open; dropping it
//! releases every connection.
//!
//! The signals remember the last snapshot emitted on any channel, so a
//! subscription started after the reference moved begins from where it is now
//! rather than from where it was when the panel last closed.

use std::sync::Arc;

use horizon_autocomplete_core::logging::targets;
use horizon_autocomplete_core::{ConnectionGuard, Signal};
use parking_lot::Mutex;

use crate::geometry::Rect;

/// Reference and viewport geometry after a layout change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSnapshot {
    pub reference: Rect,
    pub viewport: Rect,
}

/// Layout-change channels supplied by the host.
#[derive(Debug)]
pub struct LayoutSignals {
    /// Any ancestor scrolled.
    pub scrolled: Signal<LayoutSnapshot>,
    /// The viewport or the reference element resized.
    pub resized: Signal<LayoutSnapshot>,
    /// Content around the reference element changed.
    pub mutated: Signal<LayoutSnapshot>,
    last: Arc<Mutex<Option<LayoutSnapshot>>>,
    _recorders: [ConnectionGuard<LayoutSnapshot>; 3],
}

impl Default for LayoutSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSignals {
    pub fn new() -> Self {
        let scrolled = Signal::new();
        let resized = Signal::new();
        let mutated = Signal::new();
        let last = Arc::new(Mutex::new(None));
        let record = |signal: &Signal<LayoutSnapshot>| {
            let last = last.clone();
            signal.connect_scoped(move |snapshot: &LayoutSnapshot| {
                *last.lock() = Some(*snapshot);
            })
        };
        let recorders = [record(&scrolled), record(&resized), record(&mutated)];

        Self {
            scrolled,
            resized,
            mutated,
            last,
            _recorders: recorders,
        }
    }

    /// The most recent snapshot emitted on any channel.
    pub fn last_snapshot(&self) -> Option<LayoutSnapshot> {
        *self.last.lock()
    }

    /// Subscriber connections across all three channels.
    pub fn listener_count(&self) -> usize {
        let total = self.scrolled.connection_count()
            + self.resized.connection_count()
            + self.mutated.connection_count();
        total.saturating_sub(self._recorders.len())
    }
}

#[derive(Debug)]
struct Pending {
    latest: Option<LayoutSnapshot>,
    generation: u64,
}

/// A live subscription to [`LayoutSignals`].
#[derive(Debug)]
pub struct AutoUpdate {
    _guards: [ConnectionGuard<LayoutSnapshot>; 3],
    pending: Arc<Mutex<Pending>>,
    seen: u64,
}

impl AutoUpdate {
    /// Subscribe to scroll, resize and mutation notifications.
    ///
    /// The source's last snapshot, if any, is reported by the first
    /// [`take_latest`](Self::take_latest).
    pub fn start(signals: &LayoutSignals) -> Self {
        let latest = signals.last_snapshot();
        let pending = Arc::new(Mutex::new(Pending {
            latest,
            generation: u64::from(latest.is_some()),
        }));
        let connect = |signal: &Signal<LayoutSnapshot>| {
            let pending = pending.clone();
            signal.connect_scoped(move |snapshot: &LayoutSnapshot| {
                let mut pending = pending.lock();
                pending.latest = Some(*snapshot);
                pending.generation += 1;
            })
        };
        let guards = [
            connect(&signals.scrolled),
            connect(&signals.resized),
            connect(&signals.mutated),
        ];
        tracing::debug!(
            target: targets::POSITION,
            seeded = latest.is_some(),
            "auto-update started"
        );

        Self {
            _guards: guards,
            pending,
            seen: 0,
        }
    }

    /// The newest snapshot, if one arrived since the last call.
    pub fn take_latest(&mut self) -> Option<LayoutSnapshot> {
        let pending = self.pending.lock();
        if pending.generation == self.seen {
            return None;
        }
        self.seen = pending.generation;
        pending.latest
    }

    /// Number of notifications received so far, counting a retained snapshot
    /// reported at start.
    pub fn generation(&self) -> u64 {
        self.pending.lock().generation
    }

    /// Unsubscribe from every channel.
    pub fn stop(self) {
        tracing::debug!(target: targets::POSITION, "auto-update stopped");
    }
}
