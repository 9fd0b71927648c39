//! Screenflow: an event-driven navigation transducer
//!
//! Screenflow drives a search-and-detail workflow (query -> results -> item
//! detail) from a declarative transition table. The core is a pure
//! transducer: it holds a control state plus an immutable extended-state
//! record, and for each inbound event it selects a transition, evaluates its
//! guards in order, runs the matched action, patches the extended state, and
//! yields output commands. The transducer never performs I/O; commands are
//! routed by a dispatcher to handlers that render screens or invoke an
//! injected effect provider.
//!
//! # Core Concepts
//!
//! - **Control state**: the discrete workflow phase, via the
//!   [`ControlState`](core::ControlState) trait
//! - **Extended state**: the data record carried alongside the phase,
//!   replaced (never mutated) through typed update operations
//! - **Guards**: pure predicates choosing among candidate transitions;
//!   every guarded entry carries an explicit default arm
//! - **Commands**: render/query instructions emitted by actions and executed
//!   outside the transducer
//!
//! # Example
//!
//! ```rust
//! use screenflow::movies::{movie_search, SearchEvent, SearchPhase};
//!
//! let mut transducer = movie_search().expect("well-formed table");
//! assert_eq!(transducer.current_state(), SearchPhase::Start);
//!
//! let outcome = transducer.step(&SearchEvent::NavigatedToApp);
//! assert_eq!(transducer.current_state(), SearchPhase::Querying);
//! assert_eq!(outcome.outputs().len(), 2);
//! ```

pub mod core;
pub mod dispatch;
pub mod machine;
pub mod movies;
pub mod table;

// Re-export commonly used types
pub use self::core::{apply_updates, ControlState, Event, ExtendedState, Guard};
pub use dispatch::{Command, CommandHandler, Dispatcher, EventSink, Runtime};
pub use machine::{NoopObserver, StepObserver, StepOutcome, Transducer};
pub use table::{ActionOutcome, DefinitionError, TransducerBuilder, TransitionEntry};
