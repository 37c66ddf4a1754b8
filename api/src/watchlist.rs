use serde::{Deserialize, Serialize};

use crate::{Actor, MovieId, Percent};

// structs and types

pub type WatchlistId = u64;

// a named, ordered collection of films (franchise, studio catalog, tv season)
//
// the id doubles as the rank ordinal shown as "#id/total" on the detail page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: WatchlistId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub era: String,
    #[serde(default)]
    pub age_rating: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cast: Vec<Actor>,
    #[serde(default)]
    pub posters: Vec<String>,
    #[serde(default)]
    pub films: Vec<MovieId>,
    #[serde(default)]
    pub film_count: u32,
    #[serde(default)]
    pub watch_count: u32,
    #[serde(default)]
    pub watched: Percent,
    #[serde(default)]
    pub imdb_rating: Option<f32>,
    #[serde(default)]
    pub rotten_tomatoes_rating: Option<Percent>,
    #[serde(default)]
    pub released: String,
    #[serde(default)]
    pub total_runtime: String,
    #[serde(default)]
    pub boxoffice: Option<u64>,
    #[serde(default)]
    pub description: String,
}

impl Watchlist {
    pub fn new(id: WatchlistId, title: impl Into<String>) -> Self {
        Watchlist {
            id,
            title: title.into(),
            kind: String::new(),
            era: String::new(),
            age_rating: String::new(),
            genres: Vec::new(),
            directors: Vec::new(),
            writers: Vec::new(),
            languages: Vec::new(),
            countries: Vec::new(),
            cast: Vec::new(),
            posters: Vec::new(),
            films: Vec::new(),
            film_count: 0,
            watch_count: 0,
            watched: Percent::ZERO,
            imdb_rating: None,
            rotten_tomatoes_rating: None,
            released: String::new(),
            total_runtime: String::new(),
            boxoffice: None,
            description: String::new(),
        }
    }

    // the first poster is used as the hero background on the detail page
    pub fn hero_poster(&self) -> Option<&str> {
        self.posters.first().map(String::as_str)
    }

    pub fn contains(&self, movie: MovieId) -> bool {
        self.films.contains(&movie)
    }

    pub fn shares_genre_with(&self, genres: &[String]) -> bool {
        self.genres.iter().any(|g| genres.contains(g))
    }
}
