use serde::{Deserialize, Serialize};

use crate::{Movie, Watchlist};

// per-page render contexts
//
// each page template takes exactly one of these.  they are built per request
// by the server from the catalog and are never mutated while rendering.

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeContext {
    pub movies: Vec<Movie>,
    pub watchlists: Vec<Watchlist>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchlistContext {
    pub watchlist: Watchlist,
    pub album_movies: Vec<Movie>,
    pub similar_watchlists: Vec<Watchlist>,
    pub num_of_watchlists: usize,
    pub album_size: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectorRank {
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryContext {
    pub movies: Vec<Movie>,
    pub watchlists: Vec<Watchlist>,
    pub directors: Vec<DirectorRank>,
    pub num_of_movies: usize,
    pub num_of_watchlists: usize,
    pub num_of_directors: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieContext {
    pub movie: Movie,
    pub similar_movies: Vec<Movie>,
    pub albums: Vec<Watchlist>,
    pub num_of_movies: usize,
}
