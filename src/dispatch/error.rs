//! Dispatcher wiring errors.

use thiserror::Error;

/// Defects in dispatcher wiring.
///
/// Both variants are programmer errors: a correctly wired workflow
/// registers exactly one handler per command kind before the first event is
/// processed. They are surfaced loudly, never swallowed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("No handler registered for command kind '{kind}'")]
    UnhandledCommand { kind: String },

    #[error("A handler is already registered for command kind '{kind}'")]
    DuplicateHandler { kind: String },
}
