//! The transducer core: `step` and its outcome.

use crate::core::{apply_updates, ControlState, Event, ExtendedState};
use crate::machine::history::{LogEntry, TransitionLog};
use crate::machine::observer::{NoopObserver, StepObserver, StepRecord};
use crate::table::TransitionRule;
use chrono::Utc;
use std::collections::HashMap;

/// What one call to [`Transducer::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome<S, K, C> {
    /// The event resolved through the table. `from` and `to` may be equal
    /// (a same-state transition, e.g. a filtered stale result).
    Transitioned { from: S, to: S, outputs: Vec<C> },

    /// No table entry exists for (state, event kind); nothing changed and
    /// no commands were produced.
    Ignored { state: S, event: K },
}

impl<S, K, C> StepOutcome<S, K, C> {
    /// The commands this step emitted, in order. Empty for ignored events.
    pub fn outputs(&self) -> &[C] {
        match self {
            Self::Transitioned { outputs, .. } => outputs,
            Self::Ignored { .. } => &[],
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}

/// An event-driven navigation transducer.
///
/// Owns the current control state and the extended state exclusively; both
/// change only inside [`step`](Self::step). Construct one through
/// [`TransducerBuilder`](crate::table::TransducerBuilder), which validates
/// the transition table first.
pub struct Transducer<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    current: S,
    extended: X,
    rules: HashMap<(S, E::Kind), TransitionRule<S, X, E, C>>,
    observer: Box<dyn StepObserver<S, X, E, C>>,
    log: TransitionLog<S, E::Kind>,
}

impl<S, X, E, C> Transducer<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    pub(crate) fn from_parts(
        initial: S,
        extended: X,
        rules: HashMap<(S, E::Kind), TransitionRule<S, X, E, C>>,
    ) -> Self {
        Self {
            current: initial,
            extended,
            rules,
            observer: Box::new(NoopObserver),
            log: TransitionLog::new(),
        }
    }

    /// Replace the step observer (defaults to a no-op).
    pub fn with_observer(mut self, observer: Box<dyn StepObserver<S, X, E, C>>) -> Self {
        self.observer = observer;
        self
    }

    /// Current control state (pure).
    pub fn current_state(&self) -> S {
        self.current
    }

    /// Current extended state (pure, read-only).
    pub fn extended(&self) -> &X {
        &self.extended
    }

    /// Log of taken transitions (pure).
    pub fn log(&self) -> &TransitionLog<S, E::Kind> {
        &self.log
    }

    /// Process one inbound event to completion.
    ///
    /// Lookup is keyed by (current state, event kind). A missing entry is
    /// an explicit [`StepOutcome::Ignored`]: state untouched, no commands.
    /// Guarded rules evaluate their predicates in declared order against
    /// (extended state, event); the first true guard selects its arm, and
    /// the mandatory default arm catches the rest. The selected action runs
    /// as a pure function, its updates are applied copy-on-write, the
    /// destination state is adopted, and the action's commands are returned
    /// for dispatch.
    ///
    /// Deterministic: for a fixed (state, extended state, event) the
    /// resulting (state, extended state, outputs) are always identical.
    pub fn step(&mut self, event: &E) -> StepOutcome<S, E::Kind, C> {
        let kind = event.kind();

        let Some(rule) = self.rules.get(&(self.current, kind)) else {
            self.observer.on_ignored(self.current, kind);
            return StepOutcome::Ignored {
                state: self.current,
                event: kind,
            };
        };

        let arm = match rule {
            TransitionRule::Unconditional(arm) => arm,
            TransitionRule::Guarded { arms, default } => arms
                .iter()
                .find(|candidate| candidate.guard.check(&self.extended, event))
                .map(|candidate| &candidate.arm)
                .unwrap_or(default),
        };

        let outcome = (arm.action)(&self.extended, event);
        let next_extended = apply_updates(&self.extended, &outcome.updates);
        let from = self.current;
        let to = arm.to;

        self.observer.on_step(&StepRecord {
            from,
            to,
            event: kind,
            before: &self.extended,
            after: &next_extended,
            outputs: &outcome.outputs,
        });

        self.log = self.log.record(LogEntry {
            from,
            to,
            event: kind,
            timestamp: Utc::now(),
        });
        self.extended = next_extended;
        self.current = to;

        StepOutcome::Transitioned {
            from,
            to,
            outputs: outcome.outputs,
        }
    }
}
