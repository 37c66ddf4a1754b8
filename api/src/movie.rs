use serde::{Deserialize, Serialize};

use crate::Percent;

// structs and types

pub type MovieId = u64;

// a credited person, shown in the avatar rows
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub image: String,
    pub name: String,
    pub role: String,
}

// the movie view model
//
// only the id and title are required; everything else falls back to an empty
// value so that a sparse catalog entry still renders.  note that the old
// single "watched" field is split in two: watch_count is a play count and
// watched is the progress percentage used by cards and progress bars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub ranking: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub cast: Vec<Actor>,
    #[serde(default)]
    pub watch_count: u32,
    #[serde(default)]
    pub watched: Percent,
    #[serde(default)]
    pub imdb_rating: Option<f32>,
    #[serde(default)]
    pub rotten_tomatoes_rating: Option<Percent>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub poster_main: String,
    #[serde(default)]
    pub poster_stack: Vec<String>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Movie {
            id,
            title: title.into(),
            year: 0,
            ranking: 0,
            genres: Vec::new(),
            directors: Vec::new(),
            cast: Vec::new(),
            watch_count: 0,
            watched: Percent::ZERO,
            imdb_rating: None,
            rotten_tomatoes_rating: None,
            description: String::new(),
            poster_main: String::new(),
            poster_stack: Vec::new(),
        }
    }

    pub fn shares_genre_with(&self, genres: &[String]) -> bool {
        self.genres.iter().any(|g| genres.contains(g))
    }
}
