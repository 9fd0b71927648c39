//! Event trait for inbound workflow events.
//!
//! Events are tagged unions: one enum constructor per event kind, each
//! carrying its own payload. Transition lookup only needs the kind, so the
//! trait exposes a fieldless mirror of the union through an associated type.
//! Dispatch is by exhaustive match, never by string keys.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for workflow events.
///
/// # Example
///
/// ```rust
/// use screenflow::core::Event;
///
/// #[derive(Clone, Debug)]
/// enum Input {
///     Typed(String),
///     Submitted,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum InputKind {
///     Typed,
///     Submitted,
/// }
///
/// impl Event for Input {
///     type Kind = InputKind;
///
///     fn kind(&self) -> InputKind {
///         match self {
///             Self::Typed(_) => InputKind::Typed,
///             Self::Submitted => InputKind::Submitted,
///         }
///     }
/// }
///
/// assert_eq!(Input::Typed("a".into()).kind(), InputKind::Typed);
/// ```
pub trait Event: Debug + Send + Sync {
    /// Fieldless mirror of the event union, used to key transition entries.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync;

    /// The kind tag of this event, independent of its payload.
    fn kind(&self) -> Self::Kind;
}
