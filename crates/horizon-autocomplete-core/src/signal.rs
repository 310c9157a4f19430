//! Signal/slot system for Horizon Autocomplete.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism used to
//! notify hosts of value changes and to deliver layout notifications to the
//! positioning engine. Signals are emitted when state changes, and connected
//! slots (callbacks) are invoked in response.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! All slots are invoked directly on the emitting thread, in connection order.
//! Slots are snapshotted before invocation, so a slot may connect or disconnect
//! on the signal that is currently emitting.
//!
//! # Example
//!
//! ```
//! use horizon_autocomplete_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Shared connection table. Guards hold a weak reference to it.
struct SignalInner<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args> SignalInner<Args> {
    fn remove(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, i32)` for multiple arguments.
pub struct Signal<Args> {
    inner: Arc<SignalInner<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.inner.connections.lock().len())
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalInner {
                connections: Mutex::new(SlotMap::with_key()),
            }),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_autocomplete_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.inner.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot with automatic disconnection when the guard is dropped.
    ///
    /// The guard only holds a weak reference to the signal, so it is safe for
    /// the guard to outlive the signal.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_autocomplete_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Signal::<i32>::new();
    /// let counter = Arc::new(AtomicI32::new(0));
    /// {
    ///     let counter_clone = counter.clone();
    ///     let _guard = signal.connect_scoped(move |&n| {
    ///         counter_clone.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42);  // counter = 42
    /// }
    /// signal.emit(43);  // Nothing happens - connection was dropped
    /// assert_eq!(counter.load(Ordering::SeqCst), 42);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            signal: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.inner.remove(id)
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.inner.connections.lock().len()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "horizon_autocomplete_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Release the lock before invoking so slots may touch this signal.
        let slots: Vec<Slot<Args>> = self.inner.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`].
#[must_use = "dropping the guard disconnects the slot immediately"]
pub struct ConnectionGuard<Args> {
    signal: Weak<SignalInner<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Whether the connection is still live on its signal.
    pub fn is_connected(&self) -> bool {
        self.signal
            .upgrade()
            .is_some_and(|inner| inner.connections.lock().contains_key(self.id))
    }

    /// Disconnect now. Returns `false` if the signal was already dropped.
    pub fn disconnect(self) -> bool {
        self.signal
            .upgrade()
            .is_some_and(|inner| inner.remove(self.id))
        // Drop runs afterwards and finds nothing left to remove.
    }
}

impl<Args> fmt::Debug for ConnectionGuard<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard").field("id", &self.id).finish()
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.remove(self.id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(AtomicI32::new(0));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.store(value, Ordering::SeqCst);
        });

        signal.emit(42);
        assert_eq!(received.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let counter = Arc::new(AtomicI32::new(0));

        let counter_clone = counter.clone();
        let id = signal.connect(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(1);
        assert!(signal.disconnect(id));
        signal.emit(2);

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!signal.disconnect(id));
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_emit_preserves_connection_order() {
        let signal = Signal::<()>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let log = log.clone();
            signal.connect(move |_| log.lock().push(n));
        }

        signal.emit(());
        assert_eq!(*log.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Signal::<i32>::new();
        let counter = Arc::new(AtomicI32::new(0));

        {
            let counter_clone = counter.clone();
            let guard = signal.connect_scoped(move |&n| {
                counter_clone.fetch_add(n, Ordering::SeqCst);
            });
            assert!(guard.is_connected());
            signal.emit(5);
        }

        signal.emit(5);
        assert_eq!(counter.load(Ordering::SeqCst), 5);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_outlives_signal() {
        let signal = Signal::<()>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);

        assert!(!guard.is_connected());
        assert!(!guard.disconnect());
    }

    #[test]
    fn test_slot_may_disconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let counter = Arc::new(AtomicI32::new(0));
        let id_cell: Arc<Mutex<Option<ConnectionId>>> = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&signal);
        let counter_clone = counter.clone();
        let id_clone = id_cell.clone();
        let id = signal.connect(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
            if let (Some(signal), Some(id)) = (weak.upgrade(), *id_clone.lock()) {
                signal.disconnect(id);
            }
        });
        *id_cell.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
