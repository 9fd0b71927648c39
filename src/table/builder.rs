//! Builder for constructing validated transducers.

use crate::core::{ControlState, Event, ExtendedState};
use crate::machine::Transducer;
use crate::table::entry::{TransitionEntry, TransitionRule};
use crate::table::error::DefinitionError;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for a transducer with a fluent API.
///
/// `build()` validates the whole definition and accumulates ALL authoring
/// defects instead of stopping at the first one, so a malformed table is
/// reported in a single pass.
pub struct TransducerBuilder<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    initial_state: Option<S>,
    initial_extended: Option<X>,
    entries: Vec<TransitionEntry<S, X, E, C>>,
}

impl<S, X, E, C> TransducerBuilder<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_state: None,
            initial_extended: None,
            entries: Vec::new(),
        }
    }

    /// Set the initial control state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the initial extended state (required).
    pub fn extended(mut self, state: X) -> Self {
        self.initial_extended = Some(state);
        self
    }

    /// Add one transition entry.
    pub fn entry(mut self, entry: TransitionEntry<S, X, E, C>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add multiple transition entries at once.
    pub fn entries(mut self, entries: Vec<TransitionEntry<S, X, E, C>>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Validate the definition and build the transducer.
    ///
    /// Returns every [`DefinitionError`] found, not just the first.
    pub fn build(self) -> Result<Transducer<S, X, E, C>, NonEmptyVec<DefinitionError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = Vec::new();

        if self.initial_state.is_none() {
            checks.push(Validation::fail(DefinitionError::MissingInitialState));
        }
        if self.initial_extended.is_none() {
            checks.push(Validation::fail(DefinitionError::MissingInitialExtended));
        }
        if self.entries.is_empty() {
            checks.push(Validation::fail(DefinitionError::NoEntries));
        }

        let mut seen: HashSet<(S, E::Kind)> = HashSet::new();
        for entry in &self.entries {
            if !seen.insert((entry.from, entry.on)) {
                checks.push(Validation::fail(DefinitionError::DuplicateEntry {
                    from: entry.from.name().to_string(),
                    event: format!("{:?}", entry.on),
                }));
            }

            if let TransitionRule::Guarded { arms, .. } = &entry.rule {
                if arms.is_empty() {
                    checks.push(Validation::fail(DefinitionError::EmptyGuardList {
                        from: entry.from.name().to_string(),
                        event: format!("{:?}", entry.on),
                    }));
                }
            }
        }

        if let Validation::Failure(errors) = Validation::all_vec(checks).map(|_| ()) {
            return Err(errors);
        }

        let (Some(initial_state), Some(initial_extended)) =
            (self.initial_state, self.initial_extended)
        else {
            unreachable!("presence of initial states was validated above")
        };

        let mut rules: HashMap<(S, E::Kind), TransitionRule<S, X, E, C>> = HashMap::new();
        for entry in self.entries {
            rules.insert((entry.from, entry.on), entry.rule);
        }

        Ok(Transducer::from_parts(initial_state, initial_extended, rules))
    }
}

impl<S, X, E, C> Default for TransducerBuilder<S, X, E, C>
where
    S: ControlState,
    X: ExtendedState,
    E: Event,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_enum;
    use crate::core::Guard;
    use crate::table::entry::{no_actions, GuardedArm, TransitionArm};

    control_enum! {
        enum TestPhase {
            Idle,
            Busy,
        }
    }

    #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
    struct Blank;

    impl crate::core::ExtendedState for Blank {
        type Update = ();

        fn with(&self, _update: &()) -> Self {
            Blank
        }
    }

    #[derive(Clone, Debug)]
    enum Ping {
        Ping,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum PingKind {
        Ping,
    }

    impl crate::core::Event for Ping {
        type Kind = PingKind;

        fn kind(&self) -> PingKind {
            PingKind::Ping
        }
    }

    type Builder = TransducerBuilder<TestPhase, Blank, Ping, ()>;

    fn ping_entry() -> TransitionEntry<TestPhase, Blank, Ping, ()> {
        TransitionEntry::unconditional(TestPhase::Idle, PingKind::Ping, TestPhase::Busy, no_actions())
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = Builder::new().entry(ping_entry()).build();

        let errors = result.err().expect("missing initials must fail");
        assert!(errors
            .iter()
            .any(|e| matches!(e, DefinitionError::MissingInitialState)));
        assert!(errors
            .iter()
            .any(|e| matches!(e, DefinitionError::MissingInitialExtended)));
    }

    #[test]
    fn builder_requires_entries() {
        let result = Builder::new()
            .initial(TestPhase::Idle)
            .extended(Blank)
            .build();

        let errors = result.err().expect("empty table must fail");
        assert!(errors.iter().any(|e| matches!(e, DefinitionError::NoEntries)));
    }

    #[test]
    fn builder_rejects_duplicate_entries() {
        let result = Builder::new()
            .initial(TestPhase::Idle)
            .extended(Blank)
            .entry(ping_entry())
            .entry(ping_entry())
            .build();

        let errors = result.err().expect("duplicate entry must fail");
        assert!(errors
            .iter()
            .any(|e| matches!(e, DefinitionError::DuplicateEntry { .. })));
    }

    #[test]
    fn builder_rejects_empty_guard_lists() {
        let result = Builder::new()
            .initial(TestPhase::Idle)
            .extended(Blank)
            .entry(TransitionEntry::guarded(
                TestPhase::Idle,
                PingKind::Ping,
                Vec::new(),
                TransitionArm::new(TestPhase::Idle, no_actions()),
            ))
            .build();

        let errors = result.err().expect("empty guard list must fail");
        assert!(errors
            .iter()
            .any(|e| matches!(e, DefinitionError::EmptyGuardList { .. })));
    }

    #[test]
    fn builder_accumulates_all_defects() {
        let result = Builder::new()
            .entry(ping_entry())
            .entry(ping_entry())
            .build();

        let errors = result.err().expect("malformed definition must fail");
        // Missing initial control state, missing extended state, duplicate.
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn fluent_api_builds_transducer() {
        let transducer = Builder::new()
            .initial(TestPhase::Idle)
            .extended(Blank)
            .entry(ping_entry())
            .entry(TransitionEntry::guarded(
                TestPhase::Busy,
                PingKind::Ping,
                vec![GuardedArm::new(
                    Guard::new(|_: &Blank, _: &Ping| true),
                    TestPhase::Idle,
                    no_actions(),
                )],
                TransitionArm::new(TestPhase::Busy, no_actions()),
            ))
            .build();

        let transducer = transducer.expect("well-formed definition");
        assert_eq!(transducer.current_state(), TestPhase::Idle);
    }
}
