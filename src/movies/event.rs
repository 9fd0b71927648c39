//! Events of the movie-search workflow.

use crate::core::Event;
use crate::movies::data::{CastList, MovieDetail, MovieSummary};

/// Everything that can happen to the workflow: user intents and effect
/// settlements.
///
/// Data-arrival events carry the query or identifier that produced them, so
/// guards can detect stale responses downstream.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    /// The user navigated to the app; kicks off the discovery listing.
    NavigatedToApp,
    /// The query field changed. Clearing the field arrives as an empty
    /// string, which means "back to the discovery listing".
    QueryChanged(String),
    /// A search settled successfully; `query` is the query it answers.
    ResultsReceived {
        results: Vec<MovieSummary>,
        query: String,
    },
    /// A search settled with a failure.
    SearchFailed { query: String },
    /// The user picked a movie from the results.
    MovieSelected { movie: MovieSummary },
    /// A detail lookup settled successfully.
    DetailReceived {
        movie_id: u64,
        details: MovieDetail,
        cast: CastList,
    },
    /// A detail lookup settled with a failure.
    DetailFailed { movie_id: u64 },
    /// The user closed the detail view.
    DetailDismissed,
}

/// Fieldless mirror of [`SearchEvent`], keying transition entries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SearchEventKind {
    NavigatedToApp,
    QueryChanged,
    ResultsReceived,
    SearchFailed,
    MovieSelected,
    DetailReceived,
    DetailFailed,
    DetailDismissed,
}

impl Event for SearchEvent {
    type Kind = SearchEventKind;

    fn kind(&self) -> SearchEventKind {
        match self {
            Self::NavigatedToApp => SearchEventKind::NavigatedToApp,
            Self::QueryChanged(_) => SearchEventKind::QueryChanged,
            Self::ResultsReceived { .. } => SearchEventKind::ResultsReceived,
            Self::SearchFailed { .. } => SearchEventKind::SearchFailed,
            Self::MovieSelected { .. } => SearchEventKind::MovieSelected,
            Self::DetailReceived { .. } => SearchEventKind::DetailReceived,
            Self::DetailFailed { .. } => SearchEventKind::DetailFailed,
            Self::DetailDismissed => SearchEventKind::DetailDismissed,
        }
    }
}
