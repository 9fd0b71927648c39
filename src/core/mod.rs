//! Pure core of the transducer.
//!
//! This module contains the side-effect-free building blocks:
//! - Control states via the `ControlState` trait
//! - Events as tagged unions via the `Event` trait
//! - Extended state with copy-on-write patching
//! - Guard predicates for transition selection
//!
//! Everything here is pure data and pure functions; I/O lives entirely in
//! the dispatch layer.

mod event;
mod extended;
mod guard;
mod state;

pub use event::Event;
pub use extended::{apply_updates, ExtendedState};
pub use guard::Guard;
pub use state::ControlState;
