//! Property-based tests over the movie-search machine.

use proptest::prelude::*;
use screenflow::core::{apply_updates, ExtendedState};
use screenflow::movies::{
    movie_search, MovieSummary, SearchContext, SearchEvent, SearchPhase, SearchUpdate,
};

fn arb_query() -> impl Strategy<Value = String> {
    "[a-c]{0,3}"
}

fn arb_movie() -> impl Strategy<Value = MovieSummary> {
    (0u64..100, "[a-z]{1,8}").prop_map(|(id, title)| MovieSummary {
        id,
        title,
        backdrop_path: None,
    })
}

fn arb_update() -> impl Strategy<Value = SearchUpdate> {
    prop_oneof![
        any::<bool>().prop_map(SearchUpdate::QueryFieldHasChanged),
        arb_query().prop_map(SearchUpdate::MovieQuery),
        proptest::collection::vec(arb_movie(), 0..4).prop_map(SearchUpdate::Results),
        "[a-z]{1,8}".prop_map(SearchUpdate::MovieTitle),
    ]
}

fn arb_event() -> impl Strategy<Value = SearchEvent> {
    prop_oneof![
        Just(SearchEvent::NavigatedToApp),
        arb_query().prop_map(SearchEvent::QueryChanged),
        (proptest::collection::vec(arb_movie(), 0..4), arb_query())
            .prop_map(|(results, query)| SearchEvent::ResultsReceived { results, query }),
        arb_query().prop_map(|query| SearchEvent::SearchFailed { query }),
        arb_movie().prop_map(|movie| SearchEvent::MovieSelected { movie }),
        (0u64..100).prop_map(|movie_id| SearchEvent::DetailFailed { movie_id }),
        Just(SearchEvent::DetailDismissed),
    ]
}

proptest! {
    /// Patching is total and later updates to the same field win.
    #[test]
    fn patching_never_fails_and_is_ordered(
        updates in proptest::collection::vec(arb_update(), 0..12),
    ) {
        let patched = apply_updates(&SearchContext::initial(), &updates);

        let last_query = updates.iter().rev().find_map(|update| match update {
            SearchUpdate::MovieQuery(query) => Some(query.clone()),
            _ => None,
        });
        if let Some(query) = last_query {
            prop_assert_eq!(patched.movie_query, query);
        } else {
            prop_assert_eq!(patched.movie_query, SearchContext::initial().movie_query);
        }
    }

    /// A single update touches exactly one field.
    #[test]
    fn patching_leaves_other_fields_alone(update in arb_update()) {
        let initial = SearchContext::initial();
        let patched = initial.with(&update);

        match update {
            SearchUpdate::MovieQuery(_) => {
                prop_assert_eq!(patched.results, initial.results);
                prop_assert_eq!(patched.query_field_has_changed, initial.query_field_has_changed);
            }
            SearchUpdate::Results(_) => {
                prop_assert_eq!(patched.movie_query, initial.movie_query);
                prop_assert_eq!(patched.movie_title, initial.movie_title);
            }
            _ => prop_assert_eq!(patched.results, initial.results),
        }
    }

    /// Stepping is a pure function of the event sequence.
    #[test]
    fn stepping_is_deterministic(events in proptest::collection::vec(arb_event(), 0..20)) {
        let mut left = movie_search().unwrap();
        let mut right = movie_search().unwrap();

        for event in &events {
            prop_assert_eq!(left.step(event), right.step(event));
        }
        prop_assert_eq!(left.current_state(), right.current_state());
        prop_assert_eq!(left.extended(), right.extended());
    }

    /// An ignored event changes nothing.
    #[test]
    fn ignored_events_are_inert(events in proptest::collection::vec(arb_event(), 0..20)) {
        let mut machine = movie_search().unwrap();

        for event in &events {
            let state = machine.current_state();
            let extended = machine.extended().clone();
            let logged = machine.log().len();

            if machine.step(event).is_ignored() {
                prop_assert_eq!(machine.current_state(), state);
                prop_assert_eq!(machine.extended(), &extended);
                prop_assert_eq!(machine.log().len(), logged);
            }
        }
    }

    /// Every log entry chains off the previous one and ends at the
    /// current control state.
    #[test]
    fn transition_log_is_contiguous(events in proptest::collection::vec(arb_event(), 1..20)) {
        let mut machine = movie_search().unwrap();
        for event in &events {
            machine.step(event);
        }

        let entries = machine.log().entries();
        for pair in entries.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if let Some(last) = entries.last() {
            prop_assert_eq!(last.to, machine.current_state());
        } else {
            prop_assert_eq!(machine.current_state(), SearchPhase::Start);
        }
    }

    /// A response to a superseded query never leaves `Querying`.
    #[test]
    fn stale_responses_are_discarded(stale in arb_query(), current in arb_query()) {
        prop_assume!(stale != current);

        let mut machine = movie_search().unwrap();
        machine.step(&SearchEvent::NavigatedToApp);
        machine.step(&SearchEvent::QueryChanged(current.clone()));
        prop_assert_eq!(machine.current_state(), SearchPhase::Querying);

        let outcome = machine.step(&SearchEvent::ResultsReceived {
            results: Vec::new(),
            query: stale,
        });

        prop_assert!(!outcome.is_ignored());
        prop_assert!(outcome.outputs().is_empty());
        prop_assert_eq!(machine.current_state(), SearchPhase::Querying);
        prop_assert_eq!(machine.extended().movie_query.as_str(), current.as_str());
        prop_assert!(machine.extended().results.is_none());
    }

    /// Context survives a serde round trip.
    #[test]
    fn context_roundtrips_through_json(
        updates in proptest::collection::vec(arb_update(), 0..8),
    ) {
        let context = apply_updates(&SearchContext::initial(), &updates);
        let json = serde_json::to_string(&context).unwrap();
        let back: SearchContext = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, context);
    }
}
