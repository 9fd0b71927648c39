//! Extended state of the movie-search workflow.

use crate::core::ExtendedState;
use crate::movies::data::{CastList, MovieDetail, MovieSummary};
use serde::{Deserialize, Serialize};

/// The data record carried alongside the workflow phase.
///
/// `movie_query` doubles as the staleness reference: arriving search
/// responses are compared against it and discarded on mismatch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchContext {
    /// Whether the query field has ever been edited by the user.
    pub query_field_has_changed: bool,
    /// The query the workflow currently expects results for.
    pub movie_query: String,
    /// Last known result listing, kept while loading newer ones.
    pub results: Option<Vec<MovieSummary>>,
    /// Title of the currently selected movie.
    pub movie_title: Option<String>,
    /// Last fetched detail record.
    pub movie_details: Option<MovieDetail>,
    /// Last fetched credits for the selected movie.
    pub cast: Option<CastList>,
}

impl SearchContext {
    /// The record a fresh workflow starts from: empty query, nothing
    /// fetched, field untouched.
    pub fn initial() -> Self {
        Self {
            query_field_has_changed: false,
            movie_query: String::new(),
            results: None,
            movie_title: None,
            movie_details: None,
            cast: None,
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::initial()
    }
}

/// Single-field update operations over [`SearchContext`].
#[derive(Clone, Debug)]
pub enum SearchUpdate {
    QueryFieldHasChanged(bool),
    MovieQuery(String),
    Results(Vec<MovieSummary>),
    MovieTitle(String),
    MovieDetails(MovieDetail),
    Cast(CastList),
}

impl ExtendedState for SearchContext {
    type Update = SearchUpdate;

    fn with(&self, update: &SearchUpdate) -> Self {
        let mut next = self.clone();
        match update {
            SearchUpdate::QueryFieldHasChanged(changed) => {
                next.query_field_has_changed = *changed;
            }
            SearchUpdate::MovieQuery(query) => next.movie_query = query.clone(),
            SearchUpdate::Results(results) => next.results = Some(results.clone()),
            SearchUpdate::MovieTitle(title) => next.movie_title = Some(title.clone()),
            SearchUpdate::MovieDetails(details) => next.movie_details = Some(details.clone()),
            SearchUpdate::Cast(cast) => next.cast = Some(cast.clone()),
        }
        next
    }
}
