//! Authoring errors surfaced while building a transition table.

use thiserror::Error;

/// Defects in a transducer definition.
///
/// These are programmer errors, not runtime conditions: a well-formed
/// definition never produces them, and a malformed one is rejected before
/// any event is processed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionError {
    #[error("Duplicate transition entry for state '{from}' on event '{event}'")]
    DuplicateEntry { from: String, event: String },

    #[error("Guarded entry for state '{from}' on event '{event}' has no guarded arms; use an unconditional entry instead")]
    EmptyGuardList { from: String, event: String },

    #[error("Initial control state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial extended state not specified. Call .extended(state) before .build()")]
    MissingInitialExtended,

    #[error("No transition entries defined. Add at least one entry")]
    NoEntries,
}
