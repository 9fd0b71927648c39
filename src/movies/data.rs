//! Movie catalog payloads.
//!
//! Shapes follow the catalog's JSON responses; only the fields the screens
//! actually present are modeled.

use serde::{Deserialize, Serialize};

/// One row of a search or discovery listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    /// Relative image path; listings without one are not rendered as thumbnails.
    pub backdrop_path: Option<String>,
}

/// A named catalog attribute (genre, spoken language).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

/// Full detail record for a selected movie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub vote_average: f64,
    pub release_date: String,
    pub imdb_id: Option<String>,
    pub genres: Vec<Named>,
    pub spoken_languages: Vec<Named>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
}

/// The auxiliary detail fetched alongside a movie: its credits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CastList {
    pub cast: Vec<CastMember>,
}
