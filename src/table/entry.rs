//! Transition entry types: actions, arms, rules.

use crate::core::{ControlState, Event, ExtendedState, Guard};
use std::sync::Arc;

/// What an action computed: an ordered update list for the extended state
/// and an ordered command list for the dispatcher. Either may be empty.
#[derive(Clone, Debug)]
pub struct ActionOutcome<X: ExtendedState, C> {
    pub updates: Vec<X::Update>,
    pub outputs: Vec<C>,
}

impl<X: ExtendedState, C> ActionOutcome<X, C> {
    pub fn new(updates: Vec<X::Update>, outputs: Vec<C>) -> Self {
        Self { updates, outputs }
    }

    /// The no-update, no-output sentinel.
    pub fn none() -> Self {
        Self {
            updates: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// A transition action: a pure function of (extended state, event payload).
///
/// Actions must not perform I/O, read clocks, or touch anything beyond
/// their two arguments.
pub type Action<X, E, C> = Arc<dyn Fn(&X, &E) -> ActionOutcome<X, C> + Send + Sync>;

/// Wrap a closure or fn item as an [`Action`].
pub fn action<X, E, C, F>(f: F) -> Action<X, E, C>
where
    X: ExtendedState,
    F: Fn(&X, &E) -> ActionOutcome<X, C> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An action that updates nothing and outputs nothing.
pub fn no_actions<X, E, C>() -> Action<X, E, C>
where
    X: ExtendedState + 'static,
    E: 'static,
    C: 'static,
{
    Arc::new(|_, _| ActionOutcome::none())
}

/// Destination state plus the action to run on the way there.
pub struct TransitionArm<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
{
    pub to: S,
    pub action: Action<X, E, C>,
}

impl<S, X, E, C> TransitionArm<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
{
    pub fn new(to: S, action: Action<X, E, C>) -> Self {
        Self { to, action }
    }
}

/// One guarded alternative within a guarded rule.
pub struct GuardedArm<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
{
    pub guard: Guard<X, E>,
    pub arm: TransitionArm<S, X, E, C>,
}

impl<S, X, E, C> GuardedArm<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
{
    pub fn new(guard: Guard<X, E>, to: S, action: Action<X, E, C>) -> Self {
        Self {
            guard,
            arm: TransitionArm::new(to, action),
        }
    }
}

/// How a (state, event kind) pair resolves.
///
/// A guarded rule carries an explicit default arm; the type makes a
/// "no predicate fired" hole unrepresentable, so the engine never has to
/// guess what an author meant by silence.
pub enum TransitionRule<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
{
    Unconditional(TransitionArm<S, X, E, C>),
    Guarded {
        arms: Vec<GuardedArm<S, X, E, C>>,
        default: TransitionArm<S, X, E, C>,
    },
}

/// A single table entry: (from state, event kind) -> rule.
pub struct TransitionEntry<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    pub from: S,
    pub on: E::Kind,
    pub rule: TransitionRule<S, X, E, C>,
}

impl<S, X, E, C> TransitionEntry<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    /// Entry that always takes the same arm.
    pub fn unconditional(from: S, on: E::Kind, to: S, action: Action<X, E, C>) -> Self {
        Self {
            from,
            on,
            rule: TransitionRule::Unconditional(TransitionArm::new(to, action)),
        }
    }

    /// Entry choosing the first guarded arm whose predicate holds, falling
    /// back to the default arm when none does.
    pub fn guarded(
        from: S,
        on: E::Kind,
        arms: Vec<GuardedArm<S, X, E, C>>,
        default: TransitionArm<S, X, E, C>,
    ) -> Self {
        Self {
            from,
            on,
            rule: TransitionRule::Guarded { arms, default },
        }
    }
}
