//! Event submission with deferred re-entry.

use tokio::sync::mpsc;

/// Cloneable event-submission callback.
///
/// `send` enqueues the event for a later turn of the runtime loop; it never
/// re-enters the transducer synchronously. This is what keeps `step` calls
/// non-overlapping even when a handler settles immediately.
pub struct EventSink<E> {
    tx: mpsc::UnboundedSender<E>,
}

impl<E> Clone for EventSink<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: Send> EventSink<E> {
    /// Enqueue an event. If the workflow has already shut down the event is
    /// discarded; late effect settlements after teardown are not an error.
    pub fn send(&self, event: E) {
        let _ = self.tx.send(event);
    }
}

impl<E> EventSink<E> {
    /// A handle onto the same queue that does not hold it open.
    pub fn downgrade(&self) -> WeakEventSink<E> {
        WeakEventSink {
            tx: self.tx.downgrade(),
        }
    }
}

/// Non-owning handle to an event queue.
///
/// The runtime keeps one of these instead of a live [`EventSink`], so the
/// queue closes once every externally held sink (and every in-flight
/// settlement's clone) is gone.
pub struct WeakEventSink<E> {
    tx: mpsc::WeakUnboundedSender<E>,
}

impl<E> WeakEventSink<E> {
    /// Recover a live sink, if any strong sink still exists.
    pub fn upgrade(&self) -> Option<EventSink<E>> {
        self.tx.upgrade().map(|tx| EventSink { tx })
    }
}

/// Create the queue a runtime drains: a sink plus its receiver.
pub fn event_channel<E>() -> (EventSink<E>, mpsc::UnboundedReceiver<E>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink { tx }, rx)
}
