use std::{collections::HashSet, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{Level, debug, info, instrument};

use api::{
    Movie, MovieId, SIMILAR_LIMIT, Watchlist, WatchlistId,
    page::{HomeContext, LibraryContext, MovieContext, WatchlistContext},
};

use crate::select;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate movie id {0}")]
    DuplicateMovie(MovieId),
    #[error("duplicate watchlist id {0}")]
    DuplicateWatchlist(WatchlistId),
    #[error("watchlist {watchlist} references unknown movie {movie}")]
    UnknownFilm {
        watchlist: WatchlistId,
        movie: MovieId,
    },
}

// the read-only data source behind every page
//
// the catalog is checked once when it is loaded, so that the page contexts built
// from it never have to deal with dangling references.  all of the vectors keep
// the order of the file, which is also the order things are rendered in.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    movies: Vec<Movie>,
    #[serde(default)]
    watchlists: Vec<Watchlist>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, watchlists: Vec<Watchlist>) -> Result<Self, CatalogError> {
        let catalog = Catalog { movies, watchlists };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(doc: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(doc)?;
        catalog.validate()?;
        Ok(catalog)
    }

    #[instrument(level=Level::DEBUG)]
    pub async fn load(path: PathBuf) -> Result<Self, CatalogError> {
        debug!("reading catalog file");

        let doc = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            })?;

        let catalog = Catalog::from_json(&doc)?;

        info!(
            movies = catalog.movies.len(),
            watchlists = catalog.watchlists.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut movie_ids = HashSet::new();
        for movie in &self.movies {
            if !movie_ids.insert(movie.id) {
                return Err(CatalogError::DuplicateMovie(movie.id));
            }
        }

        let mut watchlist_ids = HashSet::new();
        for watchlist in &self.watchlists {
            if !watchlist_ids.insert(watchlist.id) {
                return Err(CatalogError::DuplicateWatchlist(watchlist.id));
            }

            if let Some(missing) = watchlist.films.iter().find(|id| !movie_ids.contains(*id)) {
                return Err(CatalogError::UnknownFilm {
                    watchlist: watchlist.id,
                    movie: *missing,
                });
            }
        }

        Ok(())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn watchlists(&self) -> &[Watchlist] {
        &self.watchlists
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn watchlist(&self, id: WatchlistId) -> Option<&Watchlist> {
        self.watchlists.iter().find(|w| w.id == id)
    }

    // page contexts

    pub fn home_context(&self) -> HomeContext {
        HomeContext {
            movies: self.movies.clone(),
            watchlists: self.watchlists.clone(),
        }
    }

    pub fn library_context(&self) -> LibraryContext {
        let directors = select::rank_directors(&self.movies);

        LibraryContext {
            movies: self.movies.clone(),
            watchlists: self.watchlists.clone(),
            num_of_movies: self.movies.len(),
            num_of_watchlists: self.watchlists.len(),
            num_of_directors: directors.len(),
            directors,
        }
    }

    pub fn watchlist_context(&self, id: WatchlistId) -> Option<WatchlistContext> {
        let watchlist = self.watchlist(id)?;
        let album_movies = select::album_movies(watchlist, &self.movies);

        Some(WatchlistContext {
            watchlist: watchlist.clone(),
            similar_watchlists: select::similar_watchlists(
                watchlist,
                &self.watchlists,
                SIMILAR_LIMIT,
            ),
            num_of_watchlists: self.watchlists.len(),
            album_size: album_movies.len(),
            album_movies,
        })
    }

    pub fn movie_context(&self, id: MovieId) -> Option<MovieContext> {
        let movie = self.movie(id)?;

        Some(MovieContext {
            movie: movie.clone(),
            similar_movies: select::similar_movies(movie, &self.movies, SIMILAR_LIMIT),
            albums: select::watchlists_for_movie(movie, &self.watchlists),
            num_of_movies: self.movies.len(),
        })
    }
}
