//! Injectable step observation.
//!
//! Observers see each processed step's before/after state and emitted
//! commands. The default is a no-op; `TracingObserver` emits one structured
//! `tracing` event per step. Observers must not feed events back into the
//! transducer.

use crate::core::{ControlState, Event, ExtendedState};

/// Everything one processed step did, handed to observers read-only.
pub struct StepRecord<'a, S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    pub from: S,
    pub to: S,
    pub event: E::Kind,
    pub before: &'a X,
    pub after: &'a X,
    pub outputs: &'a [C],
}

/// Observer of transducer steps.
pub trait StepObserver<S, X, E, C>: Send + Sync
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    /// Called after each step that resolved through the table, before the
    /// step's commands are dispatched.
    fn on_step(&self, record: &StepRecord<'_, S, X, E, C>);

    /// Called when an event arrives with no matching table entry.
    fn on_ignored(&self, state: S, event: E::Kind) {
        let _ = (state, event);
    }
}

/// The default observer: sees everything, does nothing.
pub struct NoopObserver;

impl<S, X, E, C> StepObserver<S, X, E, C> for NoopObserver
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    fn on_step(&self, _record: &StepRecord<'_, S, X, E, C>) {}
}

/// Observer that logs each step through `tracing`.
pub struct TracingObserver;

impl<S, X, E, C> StepObserver<S, X, E, C> for TracingObserver
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    fn on_step(&self, record: &StepRecord<'_, S, X, E, C>) {
        tracing::debug!(
            from = record.from.name(),
            to = record.to.name(),
            event = ?record.event,
            commands = record.outputs.len(),
            "transition"
        );
    }

    fn on_ignored(&self, state: S, event: E::Kind) {
        tracing::debug!(
            state = state.name(),
            event = ?event,
            "event ignored: no transition entry"
        );
    }
}
