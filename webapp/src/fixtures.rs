use api::{Movie, MovieId, Watchlist, WatchlistId};

pub fn movie(id: MovieId, title: &str) -> Movie {
    let mut movie = Movie::new(id, title);
    movie.poster_main = format!("{id}.jpg");
    movie
}

pub fn watchlist(id: WatchlistId, title: &str) -> Watchlist {
    Watchlist::new(id, title)
}
