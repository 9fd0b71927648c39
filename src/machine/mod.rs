//! The transducer engine.
//!
//! Holds the current control state and extended state, and advances one
//! inbound event at a time: look up the (state, event kind) rule, pick an
//! arm by evaluating guards in declared order, run the arm's pure action,
//! patch the extended state, adopt the destination state, and hand the
//! action's commands back to the caller.
//!
//! The engine itself performs no I/O and has no notion of screens or
//! lookups; commands are opaque to it.

mod history;
mod observer;
mod transducer;

pub use history::{LogEntry, TransitionLog};
pub use observer::{NoopObserver, StepObserver, StepRecord, TracingObserver};
pub use transducer::{StepOutcome, Transducer};
