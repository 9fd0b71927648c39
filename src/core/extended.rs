//! Extended state with copy-on-write patching.
//!
//! The extended state is the data record carried alongside the control
//! state. It is owned exclusively by the transducer and replaced, never
//! mutated in place, on every step. Updates are a closed enum per state
//! type, so an update can never target a field outside the schema.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for a workflow's extended-state record.
///
/// `with` returns a copy with exactly one field replaced; it must not touch
/// any other field and must not observe anything but its inputs.
///
/// # Example
///
/// ```rust
/// use screenflow::core::{apply_updates, ExtendedState};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Form {
///     query: String,
///     dirty: bool,
/// }
///
/// #[derive(Clone, Debug)]
/// enum FormUpdate {
///     Query(String),
///     Dirty(bool),
/// }
///
/// impl ExtendedState for Form {
///     type Update = FormUpdate;
///
///     fn with(&self, update: &FormUpdate) -> Self {
///         let mut next = self.clone();
///         match update {
///             FormUpdate::Query(q) => next.query = q.clone(),
///             FormUpdate::Dirty(d) => next.dirty = *d,
///         }
///         next
///     }
/// }
///
/// let form = Form { query: String::new(), dirty: false };
/// let patched = apply_updates(
///     &form,
///     &[FormUpdate::Query("batman".into()), FormUpdate::Dirty(true)],
/// );
/// assert_eq!(patched.query, "batman");
/// assert!(patched.dirty);
/// assert_eq!(form.query, ""); // original untouched
/// ```
pub trait ExtendedState:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Closed set of single-field update operations for this record.
    type Update: Clone + Debug + Send + Sync;

    /// Return a copy of this record with the update's target field replaced.
    fn with(&self, update: &Self::Update) -> Self;
}

/// Apply an ordered list of updates, producing the next record.
///
/// Updates are folded in list order; later operations on the same field win.
/// An empty list yields a record equal to the input.
pub fn apply_updates<X: ExtendedState>(state: &X, updates: &[X::Update]) -> X {
    updates
        .iter()
        .fold(state.clone(), |next, update| next.with(update))
}
