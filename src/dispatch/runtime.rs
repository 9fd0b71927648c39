//! The workflow runtime loop.

use crate::core::{ControlState, Event, ExtendedState};
use crate::dispatch::command::Command;
use crate::dispatch::dispatcher::Dispatcher;
use crate::dispatch::error::DispatchError;
use crate::dispatch::sink::{event_channel, EventSink, WeakEventSink};
use crate::machine::{StepOutcome, Transducer};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Drives a transducer from an event queue.
///
/// One runtime owns one transducer; all events funnel through a single
/// queue and are processed to completion one at a time, in arrival order.
/// Effect-provider calls spawned by query handlers settle back into the
/// same queue, which is the system's only asynchronous boundary.
///
/// The runtime holds its own copy of the event sink only until [`run`]
/// starts; from then on the queue stays open exactly as long as an
/// externally held sink or an in-flight settlement does, so `run` returns
/// once the last of those is gone and the queue is drained.
///
/// [`run`]: Self::run
pub struct Runtime<S, X, E, C, P>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
    C: Command,
{
    transducer: Transducer<S, X, E, C>,
    dispatcher: Dispatcher<C, E, P>,
    provider: Arc<P>,
    sink: Option<EventSink<E>>,
    reentry: WeakEventSink<E>,
    events: mpsc::UnboundedReceiver<E>,
    initial_event: Option<E>,
}

impl<S, X, E, C, P> Runtime<S, X, E, C, P>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
    C: Command,
{
    pub fn new(
        transducer: Transducer<S, X, E, C>,
        dispatcher: Dispatcher<C, E, P>,
        provider: Arc<P>,
    ) -> Self {
        let (sink, events) = event_channel();
        let reentry = sink.downgrade();
        Self {
            transducer,
            dispatcher,
            provider,
            sink: Some(sink),
            reentry,
            events,
            initial_event: None,
        }
    }

    /// Event submitted automatically when the runtime starts (e.g. the
    /// "navigated to app" event).
    pub fn with_initial_event(mut self, event: E) -> Self {
        self.initial_event = Some(event);
        self
    }

    /// Hand out the external event-submission callback.
    pub fn sink(&self) -> EventSink<E> {
        match &self.sink {
            Some(sink) => sink.clone(),
            None => self.submission(),
        }
    }

    /// Read-only view of the driven transducer.
    pub fn transducer(&self) -> &Transducer<S, X, E, C> {
        &self.transducer
    }

    // Sink handed to command handlers for effect settlements. Once the
    // queue has closed there is nothing left to settle into; a detached
    // sink discards sends, same as any late settlement.
    fn submission(&self) -> EventSink<E> {
        self.reentry.upgrade().unwrap_or_else(|| event_channel().0)
    }

    /// Receive and process a single event.
    ///
    /// Returns `Ok(false)` once the queue has closed and drained. While the
    /// runtime still holds its own sink (before [`run`](Self::run) releases
    /// it), the queue never closes and this only ever resolves with an
    /// event. Dispatch failures are wiring defects and abort processing.
    pub async fn process_next(&mut self) -> Result<bool, DispatchError> {
        if let Some(event) = self.initial_event.take() {
            self.sink().send(event);
        }

        match self.events.recv().await {
            Some(event) => {
                self.process(event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Run for the life of the workflow: until every external sink is
    /// dropped, no settlement is in flight, and the queue is drained.
    pub async fn run(mut self) -> Result<(), DispatchError> {
        if let Some(event) = self.initial_event.take() {
            self.sink().send(event);
        }
        self.sink = None;

        while self.process_next().await? {}
        Ok(())
    }

    fn process(&mut self, event: E) -> Result<(), DispatchError> {
        if let StepOutcome::Transitioned { outputs, .. } = self.transducer.step(&event) {
            let sink = self.submission();
            for command in outputs {
                self.dispatcher.dispatch(command, &sink, &self.provider)?;
            }
        }
        Ok(())
    }
}
