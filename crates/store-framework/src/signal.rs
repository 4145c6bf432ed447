//! # Signal Bus
//!
//! Payload-less change notifications. A component that mutates a store key emits a signal;
//! any listener that cares re-reads the key. There is no cache and no reactive state, the
//! signal only says "something you depend on changed".
//!
//! Built on `tokio::sync::broadcast`, so every subscriber sees every signal emitted after it
//! subscribed. Emitting with no subscribers is not an error.

use std::fmt::Debug;
use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// Broadcast channel for change signals of type `E`.
#[derive(Clone)]
pub struct SignalBus<E: Clone + Debug + Send + 'static> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone + Debug + Send + 'static> SignalBus<E> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Broadcasts `signal` to the current subscribers and returns how many received it.
    pub fn emit(&self, signal: E) -> usize {
        let delivered = self.sender.send(signal.clone()).unwrap_or(0);
        debug!(?signal, delivered, "Signal emitted");
        delivered
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E: Clone + Debug + Send + 'static> Default for SignalBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
