use std::collections::HashMap;

use api::{Movie, Watchlist, page::DirectorRank};

// helpers that pick the related items shown on the detail pages
//
// none of these sort by relevance; results always come back in catalog order

// the films of a watchlist, in the order the watchlist lists them
pub fn album_movies(watchlist: &Watchlist, movies: &[Movie]) -> Vec<Movie> {
    watchlist
        .films
        .iter()
        .filter_map(|id| movies.iter().find(|m| m.id == *id))
        .cloned()
        .collect()
}

pub fn similar_watchlists(watchlist: &Watchlist, watchlists: &[Watchlist], limit: usize) -> Vec<Watchlist> {
    watchlists
        .iter()
        .filter(|w| w.id != watchlist.id && w.shares_genre_with(&watchlist.genres))
        .take(limit)
        .cloned()
        .collect()
}

pub fn similar_movies(movie: &Movie, movies: &[Movie], limit: usize) -> Vec<Movie> {
    movies
        .iter()
        .filter(|m| m.id != movie.id && m.shares_genre_with(&movie.genres))
        .take(limit)
        .cloned()
        .collect()
}

pub fn watchlists_for_movie(movie: &Movie, watchlists: &[Watchlist]) -> Vec<Watchlist> {
    watchlists
        .iter()
        .filter(|w| w.contains(movie.id))
        .cloned()
        .collect()
}

// rank directors by the mean ranking of their movies
//
// the score is rounded half away from zero, and the sort is stable so that
// directors with the same score keep the order they were first seen in
pub fn rank_directors(movies: &[Movie]) -> Vec<DirectorRank> {
    let mut order: Vec<&str> = Vec::new();
    let mut rankings: HashMap<&str, Vec<u32>> = HashMap::new();

    for movie in movies {
        for director in &movie.directors {
            rankings
                .entry(director.as_str())
                .or_insert_with(|| {
                    order.push(director.as_str());
                    Vec::new()
                })
                .push(movie.ranking);
        }
    }

    let mut ranked: Vec<DirectorRank> = order
        .into_iter()
        .map(|name| {
            let scores = &rankings[name];
            let sum: u64 = scores.iter().map(|s| u64::from(*s)).sum();
            let mean = sum as f64 / scores.len() as f64;

            DirectorRank {
                name: name.to_owned(),
                score: mean.round() as u32,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
