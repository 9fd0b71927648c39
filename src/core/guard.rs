//! Guard predicates for transition selection.
//!
//! Guards are pure boolean functions of (extended state, event payload).
//! They choose among candidate transitions for the same (state, event) pair
//! without side effects.

/// Pure predicate over the current extended state and an inbound event.
///
/// Guards are evaluated in declared order when a table entry has several
/// candidate arms; the first guard that returns true selects its arm.
///
/// # Example
///
/// ```rust
/// use screenflow::core::Guard;
///
/// // Guard that fires only when the arriving value matches what we expect.
/// let expected: Guard<String, String> = Guard::new(|want, got| want == got);
///
/// assert!(expected.check(&"batman".to_string(), &"batman".to_string()));
/// assert!(!expected.check(&"batman".to_string(), &"zzz".to_string()));
/// ```
pub struct Guard<X, E> {
    predicate: Box<dyn Fn(&X, &E) -> bool + Send + Sync>,
}

impl<X, E> Guard<X, E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects: no
    /// clock reads, no randomness, no I/O.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&X, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against the current extended state and event.
    pub fn check(&self, extended: &X, event: &E) -> bool {
        (self.predicate)(extended, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Expectation {
        query: String,
    }

    struct Arrival {
        query: String,
    }

    #[test]
    fn guard_compares_state_and_payload() {
        let guard: Guard<Expectation, Arrival> =
            Guard::new(|state: &Expectation, event: &Arrival| state.query == event.query);

        let state = Expectation {
            query: "batman".into(),
        };

        assert!(guard.check(
            &state,
            &Arrival {
                query: "batman".into()
            }
        ));
        assert!(!guard.check(
            &state,
            &Arrival {
                query: "zzz".into()
            }
        ));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard: Guard<u32, u32> = Guard::new(|state, event| state < event);

        let first = guard.check(&1, &2);
        let second = guard.check(&1, &2);

        assert_eq!(first, second);
    }

    #[test]
    fn guard_can_ignore_the_event() {
        let guard: Guard<bool, ()> = Guard::new(|dirty, _| *dirty);

        assert!(guard.check(&true, &()));
        assert!(!guard.check(&false, &()));
    }
}
