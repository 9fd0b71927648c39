//! The movie-search transition table: guards and actions.
//!
//! Actions are pure functions of (context, event); they compute updates and
//! commands, never perform lookups or rendering themselves. The staleness
//! guard on every data arrival out of `Querying` is the workflow's sole
//! concurrency mechanism: in-flight lookups are never cancelled, their
//! results are discarded when they answer a query the user has moved past.

use crate::core::Guard;
use crate::machine::Transducer;
use crate::movies::command::{Screen, SearchCommand};
use crate::movies::context::{SearchContext, SearchUpdate};
use crate::movies::event::{SearchEvent, SearchEventKind};
use crate::movies::phase::SearchPhase;
use crate::table::{
    action, no_actions, ActionOutcome, DefinitionError, GuardedArm, TransducerBuilder,
    TransitionArm, TransitionEntry,
};
use stillwater::NonEmptyVec;

type Outcome = ActionOutcome<SearchContext, SearchCommand>;
type Entry = TransitionEntry<SearchPhase, SearchContext, SearchEvent, SearchCommand>;

/// Does the arriving response answer the query we currently expect?
fn is_expected_results(context: &SearchContext, event: &SearchEvent) -> bool {
    let arriving = match event {
        SearchEvent::ResultsReceived { query, .. } => query,
        SearchEvent::SearchFailed { query } => query,
        _ => return false,
    };
    *arriving == context.movie_query
}

fn show_loading_and_search(_context: &SearchContext, _event: &SearchEvent) -> Outcome {
    ActionOutcome::new(
        Vec::new(),
        vec![
            SearchCommand::Render(Screen::Loading),
            SearchCommand::SearchMovies {
                query: String::new(),
            },
        ],
    )
}

fn requery(context: &SearchContext, event: &SearchEvent) -> Outcome {
    let SearchEvent::QueryChanged(query) = event else {
        unreachable!("entry is keyed on QueryChanged");
    };
    ActionOutcome::new(
        vec![
            SearchUpdate::QueryFieldHasChanged(true),
            SearchUpdate::MovieQuery(query.clone()),
        ],
        vec![
            SearchCommand::Render(Screen::ResultsWithLoading {
                results: context.results.clone(),
                query: query.clone(),
            }),
            SearchCommand::SearchMovies {
                query: query.clone(),
            },
        ],
    )
}

fn show_results(_context: &SearchContext, event: &SearchEvent) -> Outcome {
    let SearchEvent::ResultsReceived { results, query } = event else {
        unreachable!("entry is keyed on ResultsReceived");
    };
    ActionOutcome::new(
        vec![SearchUpdate::Results(results.clone())],
        vec![SearchCommand::Render(Screen::Results {
            results: Some(results.clone()),
            query: query.clone(),
        })],
    )
}

fn show_search_error(context: &SearchContext, _event: &SearchEvent) -> Outcome {
    // An untouched query field means the failed search was the discovery
    // listing; the error screen shows an empty query then.
    let query = if context.query_field_has_changed {
        context.movie_query.clone()
    } else {
        String::new()
    };
    ActionOutcome::new(
        Vec::new(),
        vec![SearchCommand::Render(Screen::SearchError { query })],
    )
}

fn show_detail_loading_and_fetch(context: &SearchContext, event: &SearchEvent) -> Outcome {
    let SearchEvent::MovieSelected { movie } = event else {
        unreachable!("entry is keyed on MovieSelected");
    };
    ActionOutcome::new(
        vec![SearchUpdate::MovieTitle(movie.title.clone())],
        vec![
            SearchCommand::Render(Screen::DetailLoading {
                results: context.results.clone(),
                query: context.movie_query.clone(),
                movie: movie.clone(),
            }),
            SearchCommand::FetchDetail { movie_id: movie.id },
        ],
    )
}

fn show_detail(context: &SearchContext, event: &SearchEvent) -> Outcome {
    let SearchEvent::DetailReceived { details, cast, .. } = event else {
        unreachable!("entry is keyed on DetailReceived");
    };
    ActionOutcome::new(
        vec![
            SearchUpdate::MovieDetails(details.clone()),
            SearchUpdate::Cast(cast.clone()),
        ],
        vec![SearchCommand::Render(Screen::Detail {
            results: context.results.clone(),
            query: context.movie_query.clone(),
            details: details.clone(),
            cast: cast.clone(),
        })],
    )
}

fn show_detail_error(context: &SearchContext, _event: &SearchEvent) -> Outcome {
    ActionOutcome::new(
        Vec::new(),
        vec![SearchCommand::Render(Screen::DetailError {
            results: context.results.clone(),
            query: context.movie_query.clone(),
            title: context.movie_title.clone().unwrap_or_default(),
        })],
    )
}

fn show_current_results(context: &SearchContext, _event: &SearchEvent) -> Outcome {
    ActionOutcome::new(
        Vec::new(),
        vec![SearchCommand::Render(Screen::Results {
            results: context.results.clone(),
            query: context.movie_query.clone(),
        })],
    )
}

/// A data-arrival entry out of `Querying`: take the arm when the response
/// answers the expected query, otherwise consume it as a same-state no-op.
fn stale_guarded(on: SearchEventKind, to: SearchPhase, matched: fn(&SearchContext, &SearchEvent) -> Outcome) -> Entry {
    TransitionEntry::guarded(
        SearchPhase::Querying,
        on,
        vec![GuardedArm::new(
            Guard::new(is_expected_results),
            to,
            action(matched),
        )],
        TransitionArm::new(SearchPhase::Querying, no_actions()),
    )
}

/// Build the validated movie-search transducer.
pub fn movie_search() -> Result<
    Transducer<SearchPhase, SearchContext, SearchEvent, SearchCommand>,
    NonEmptyVec<DefinitionError>,
> {
    TransducerBuilder::new()
        .initial(SearchPhase::Start)
        .extended(SearchContext::initial())
        .entry(TransitionEntry::unconditional(
            SearchPhase::Start,
            SearchEventKind::NavigatedToApp,
            SearchPhase::Querying,
            action(show_loading_and_search),
        ))
        .entry(stale_guarded(
            SearchEventKind::ResultsReceived,
            SearchPhase::ResultsShown,
            show_results,
        ))
        .entry(stale_guarded(
            SearchEventKind::SearchFailed,
            SearchPhase::ResultsError,
            show_search_error,
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::Querying,
            SearchEventKind::QueryChanged,
            SearchPhase::Querying,
            action(requery),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::ResultsShown,
            SearchEventKind::QueryChanged,
            SearchPhase::Querying,
            action(requery),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::ResultsError,
            SearchEventKind::QueryChanged,
            SearchPhase::Querying,
            action(requery),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::ResultsShown,
            SearchEventKind::MovieSelected,
            SearchPhase::DetailQuerying,
            action(show_detail_loading_and_fetch),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::DetailQuerying,
            SearchEventKind::DetailReceived,
            SearchPhase::DetailShown,
            action(show_detail),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::DetailQuerying,
            SearchEventKind::DetailFailed,
            SearchPhase::DetailError,
            action(show_detail_error),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::DetailShown,
            SearchEventKind::DetailDismissed,
            SearchPhase::ResultsShown,
            action(show_current_results),
        ))
        .entry(TransitionEntry::unconditional(
            SearchPhase::DetailError,
            SearchEventKind::DetailDismissed,
            SearchPhase::ResultsShown,
            action(show_current_results),
        ))
        .build()
}
