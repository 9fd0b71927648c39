//! Control-state trait for workflow phases.
//!
//! Exactly one control state is active at a time; the transition table is
//! keyed by (control state, event kind), so states must be small copyable
//! values usable as map keys.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for workflow control states.
///
/// Control states are closed enums describing the discrete phase of a
/// workflow (querying, results shown, detail shown, ...). All methods are
/// pure.
///
/// The [`control_enum!`](crate::control_enum) macro generates this impl for
/// simple enums.
///
/// # Example
///
/// ```rust
/// use screenflow::core::ControlState;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Busy,
///     Broken,
/// }
///
/// impl ControlState for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Busy => "Busy",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(Phase::Busy.name(), "Busy");
/// assert!(Phase::Broken.is_error());
/// ```
pub trait ControlState:
    Copy + Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state represents a failure surfaced to the user
    /// (e.g. a search-error screen).
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
