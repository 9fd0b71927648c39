//! Scripted walkthrough of the movie-search workflow against a stub
//! catalog. Run with `cargo run --example movie_search`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use screenflow::movies::{
    movie_search_runtime, CastList, CastMember, CatalogError, MovieCatalog, MovieDetail,
    MovieSummary, Named, Screen, ScreenSink, SearchEvent,
};

struct StubCatalog;

fn listing() -> Vec<MovieSummary> {
    vec![
        MovieSummary {
            id: 438631,
            title: "Dune".into(),
            backdrop_path: Some("/dune.jpg".into()),
        },
        MovieSummary {
            id: 27205,
            title: "Inception".into(),
            backdrop_path: Some("/inception.jpg".into()),
        },
        MovieSummary {
            id: 603,
            title: "The Matrix".into(),
            backdrop_path: None,
        },
    ]
}

#[async_trait]
impl MovieCatalog for StubCatalog {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        // Simulated network latency.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let needle = query.to_lowercase();
        Ok(listing()
            .into_iter()
            .filter(|movie| needle.is_empty() || movie.title.to_lowercase().contains(&needle))
            .collect())
    }

    async fn detail(&self, movie_id: u64) -> Result<(MovieDetail, CastList), CatalogError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if movie_id != 438631 {
            return Err(CatalogError::NotFound(movie_id));
        }
        let details = MovieDetail {
            title: "Dune".into(),
            original_title: "Dune".into(),
            overview: "Paul Atreides leads nomadic tribes in a battle for Arrakis.".into(),
            poster_path: Some("/dune_poster.jpg".into()),
            vote_average: 7.8,
            release_date: "2021-09-15".into(),
            imdb_id: Some("tt1160419".into()),
            genres: vec![Named {
                name: "Science Fiction".into(),
            }],
            spoken_languages: vec![Named {
                name: "English".into(),
            }],
        };
        let cast = CastList {
            cast: vec![
                CastMember {
                    name: "Timothée Chalamet".into(),
                },
                CastMember {
                    name: "Rebecca Ferguson".into(),
                },
            ],
        };
        Ok((details, cast))
    }
}

struct ConsoleScreens;

impl ScreenSink for ConsoleScreens {
    fn render(&self, screen: &Screen) {
        match screen {
            Screen::Loading => println!("[screen] loading…"),
            Screen::Results { results, query } => {
                let count = results.as_ref().map_or(0, Vec::len);
                println!("[screen] results for {query:?}: {count} movie(s)");
            }
            Screen::ResultsWithLoading { query, .. } => {
                println!("[screen] searching {query:?} (previous results still shown)");
            }
            Screen::SearchError { query } => println!("[screen] search for {query:?} failed"),
            Screen::DetailLoading { movie, .. } => {
                println!("[screen] fetching detail for {}…", movie.title);
            }
            Screen::Detail { details, cast, .. } => {
                println!(
                    "[screen] {} ({}) starring {}",
                    details.title,
                    details.release_date,
                    cast.cast
                        .iter()
                        .map(|member| member.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            Screen::DetailError { title, .. } => {
                println!("[screen] could not load detail for {title:?}");
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut runtime = movie_search_runtime(Arc::new(StubCatalog), Arc::new(ConsoleScreens))?;
    let sink = runtime.sink();

    // Navigation + the discovery listing response.
    runtime.process_next().await?;
    runtime.process_next().await?;

    // The user types a query.
    sink.send(SearchEvent::QueryChanged("dune".into()));
    runtime.process_next().await?;
    runtime.process_next().await?;

    // The user opens the first result, reads the detail page, then goes back.
    let dune = listing().remove(0);
    sink.send(SearchEvent::MovieSelected { movie: dune });
    runtime.process_next().await?;
    runtime.process_next().await?;

    sink.send(SearchEvent::DetailDismissed);
    runtime.process_next().await?;

    println!("final phase: {:?}", runtime.transducer().current_state());
    Ok(())
}
