//! Declarative transition table and its construction-time validation.
//!
//! A table maps (control state, event kind) pairs to either a single
//! unconditional transition or an ordered list of guarded alternatives with
//! a mandatory default arm. The table is pure data; the only behavior it
//! references is guard predicates and action functions.
//!
//! Authoring defects (duplicate entries, guarded entries with no arms) are
//! rejected when the table is built, with ALL defects accumulated via
//! Stillwater's `Validation` rather than reported one at a time.

mod builder;
mod entry;
mod error;
pub mod macros;

pub use builder::TransducerBuilder;
pub use entry::{
    action, no_actions, Action, ActionOutcome, GuardedArm, TransitionArm, TransitionEntry,
    TransitionRule,
};
pub use error::DefinitionError;
