//! Command handlers and the effect boundary for the movie workflow.
//!
//! Rendering is synchronous and happens inline. Catalog lookups are
//! spawned so the event loop keeps draining while a query is in flight;
//! each lookup settles back into the loop as a [`SearchEvent`] carrying
//! the query (or movie id) it answers, which is what the staleness
//! guards in the transition table compare against.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::dispatch::{CommandHandler, EventSink};
use crate::movies::command::{Screen, SearchCommand};
use crate::movies::data::{CastList, MovieDetail, MovieSummary};
use crate::movies::event::SearchEvent;

/// Failures surfaced by a [`MovieCatalog`].
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("catalog unreachable: {0}")]
    Unreachable(String),
    #[error("no movie with id {0}")]
    NotFound(u64),
}

/// The movie catalog the workflow queries. An empty query asks for the
/// discovery listing rather than a search.
#[async_trait]
pub trait MovieCatalog: Send + Sync + 'static {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError>;

    async fn detail(&self, movie_id: u64) -> Result<(MovieDetail, CastList), CatalogError>;
}

/// Where render commands land. Implementations draw the screen; the
/// workflow never looks at what they do with it.
pub trait ScreenSink: Send + Sync + 'static {
    fn render(&self, screen: &Screen);
}

/// Handles [`SearchCommand::Render`] by forwarding the screen to the sink.
pub struct RenderHandler {
    screens: Arc<dyn ScreenSink>,
}

impl RenderHandler {
    pub fn new(screens: Arc<dyn ScreenSink>) -> Self {
        Self { screens }
    }
}

impl<P: MovieCatalog> CommandHandler<SearchCommand, SearchEvent, P> for RenderHandler {
    fn handle(&self, command: SearchCommand, _next: &EventSink<SearchEvent>, _provider: &Arc<P>) {
        let SearchCommand::Render(screen) = command else {
            unreachable!("registered for the Render kind only");
        };
        self.screens.render(&screen);
    }
}

/// Handles [`SearchCommand::SearchMovies`] by spawning a catalog search.
pub struct SearchQueryHandler;

impl<P: MovieCatalog> CommandHandler<SearchCommand, SearchEvent, P> for SearchQueryHandler {
    fn handle(&self, command: SearchCommand, next: &EventSink<SearchEvent>, provider: &Arc<P>) {
        let SearchCommand::SearchMovies { query } = command else {
            unreachable!("registered for the SearchMovies kind only");
        };
        let next = next.clone();
        let provider = Arc::clone(provider);
        tokio::spawn(async move {
            match provider.search(&query).await {
                Ok(results) => next.send(SearchEvent::ResultsReceived { results, query }),
                Err(error) => {
                    warn!(%query, %error, "movie search failed");
                    next.send(SearchEvent::SearchFailed { query });
                }
            }
        });
    }
}

/// Handles [`SearchCommand::FetchDetail`] by spawning a detail lookup.
pub struct DetailQueryHandler;

impl<P: MovieCatalog> CommandHandler<SearchCommand, SearchEvent, P> for DetailQueryHandler {
    fn handle(&self, command: SearchCommand, next: &EventSink<SearchEvent>, provider: &Arc<P>) {
        let SearchCommand::FetchDetail { movie_id } = command else {
            unreachable!("registered for the FetchDetail kind only");
        };
        let next = next.clone();
        let provider = Arc::clone(provider);
        tokio::spawn(async move {
            match provider.detail(movie_id).await {
                Ok((details, cast)) => next.send(SearchEvent::DetailReceived {
                    movie_id,
                    details,
                    cast,
                }),
                Err(error) => {
                    warn!(movie_id, %error, "movie detail lookup failed");
                    next.send(SearchEvent::DetailFailed { movie_id });
                }
            }
        });
    }
}
