//! The movie-search workflow: query -> results -> movie detail.
//!
//! This module defines the concrete machine the crate ships: control
//! phases, the extended-state record, the event and command vocabularies,
//! the transition table with its staleness guards, and the command handlers
//! that bridge to a presentation layer and an async movie catalog.

mod command;
mod context;
mod data;
mod event;
mod handlers;
mod phase;
mod table;

pub use command::{Screen, SearchCommand, SearchCommandKind};
pub use context::{SearchContext, SearchUpdate};
pub use data::{CastList, CastMember, MovieDetail, MovieSummary, Named};
pub use event::{SearchEvent, SearchEventKind};
pub use handlers::{
    CatalogError, DetailQueryHandler, MovieCatalog, RenderHandler, ScreenSink, SearchQueryHandler,
};
pub use phase::SearchPhase;
pub use table::movie_search;

use crate::dispatch::{Dispatcher, Runtime};
use crate::table::DefinitionError;
use std::sync::Arc;
use thiserror::Error;

/// Wiring failures while assembling the movie-search workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("invalid transition table ({} defects)", .0.len())]
    Definition(Vec<DefinitionError>),

    #[error(transparent)]
    Dispatch(#[from] crate::dispatch::DispatchError),
}

/// Assemble the full workflow: validated transducer, dispatcher with one
/// handler per command kind, and the initial "navigated to app" event.
///
/// The caller spawns `run()` and submits user events through `sink()`.
pub fn movie_search_runtime<P>(
    provider: Arc<P>,
    screens: Arc<dyn ScreenSink>,
) -> Result<Runtime<SearchPhase, SearchContext, SearchEvent, SearchCommand, P>, WorkflowError>
where
    P: MovieCatalog,
{
    let transducer = movie_search()
        .map_err(|errors| WorkflowError::Definition(errors.iter().cloned().collect()))?;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(
        SearchCommandKind::Render,
        Box::new(RenderHandler::new(screens)),
    )?;
    dispatcher.register(SearchCommandKind::SearchMovies, Box::new(SearchQueryHandler))?;
    dispatcher.register(SearchCommandKind::FetchDetail, Box::new(DetailQueryHandler))?;

    Ok(Runtime::new(transducer, dispatcher, provider)
        .with_initial_event(SearchEvent::NavigatedToApp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlState;

    struct NullScreens;

    impl ScreenSink for NullScreens {
        fn render(&self, _screen: &Screen) {}
    }

    struct NullCatalog;

    #[async_trait::async_trait]
    impl MovieCatalog for NullCatalog {
        async fn search(&self, _query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
            Ok(Vec::new())
        }

        async fn detail(&self, movie_id: u64) -> Result<(MovieDetail, CastList), CatalogError> {
            Err(CatalogError::NotFound(movie_id))
        }
    }

    #[tokio::test]
    async fn runtime_wires_up_and_starts_at_the_initial_phase() {
        let runtime = movie_search_runtime(Arc::new(NullCatalog), Arc::new(NullScreens))
            .expect("wiring is sound");

        assert_eq!(runtime.transducer().current_state(), SearchPhase::Start);
        assert_eq!(runtime.transducer().current_state().name(), "Start");
    }
}
