//! Commands and the screen vocabulary of the movie-search workflow.

use crate::dispatch::Command;
use crate::movies::data::{CastList, MovieDetail, MovieSummary};

/// A screen identifier plus everything that screen needs to render.
///
/// Which screen is correct for which phase is encoded entirely in which
/// action emits which `Render`; the engine has no notion of screens.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    /// First load, nothing to show yet.
    Loading,
    /// A result listing for `query` (empty query = discovery listing).
    Results {
        results: Option<Vec<MovieSummary>>,
        query: String,
    },
    /// The search for `query` failed.
    SearchError { query: String },
    /// A new search is loading; the previous listing stays visible.
    ResultsWithLoading {
        results: Option<Vec<MovieSummary>>,
        query: String,
    },
    /// Detail pane loading over the current listing.
    DetailLoading {
        results: Option<Vec<MovieSummary>>,
        query: String,
        movie: MovieSummary,
    },
    /// Full detail pane over the current listing.
    Detail {
        results: Option<Vec<MovieSummary>>,
        query: String,
        details: MovieDetail,
        cast: CastList,
    },
    /// Detail lookup failed for the movie titled `title`.
    DetailError {
        results: Option<Vec<MovieSummary>>,
        query: String,
        title: String,
    },
}

/// Output commands emitted by the workflow's actions.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchCommand {
    /// Hand a screen to the presentation layer.
    Render(Screen),
    /// Run a catalog search (empty query = discovery listing).
    SearchMovies { query: String },
    /// Fetch detail + credits for one movie.
    FetchDetail { movie_id: u64 },
}

/// Fieldless mirror of [`SearchCommand`], keying handler registration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SearchCommandKind {
    Render,
    SearchMovies,
    FetchDetail,
}

impl Command for SearchCommand {
    type Kind = SearchCommandKind;

    fn kind(&self) -> SearchCommandKind {
        match self {
            Self::Render(_) => SearchCommandKind::Render,
            Self::SearchMovies { .. } => SearchCommandKind::SearchMovies,
            Self::FetchDetail { .. } => SearchCommandKind::FetchDetail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_mirror_variants() {
        assert_eq!(
            SearchCommand::Render(Screen::Loading).kind(),
            SearchCommandKind::Render
        );
        assert_eq!(
            SearchCommand::SearchMovies {
                query: String::new()
            }
            .kind(),
            SearchCommandKind::SearchMovies
        );
        assert_eq!(
            SearchCommand::FetchDetail { movie_id: 42 }.kind(),
            SearchCommandKind::FetchDetail
        );
    }
}
