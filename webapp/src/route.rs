use std::fmt;

use api::{MovieId, WatchlistId};

// absolute paths of the pages the layout links to
//
// these mirror the server routes; the server is the only thing that parses them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Library,
    Player,
    People { person_id: String },
    Movie { id: MovieId },
    Watchlist { id: WatchlistId },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Library => write!(f, "/library"),
            Route::Player => write!(f, "/player"),
            Route::People { person_id } => {
                write!(f, "/people/{}", urlencoding::encode(person_id))
            }
            Route::Movie { id } => write!(f, "/movie/{id}"),
            Route::Watchlist { id } => write!(f, "/watchlist/{id}"),
        }
    }
}

// url root for files served out of the static directory
pub const STATIC_ROOT: &str = "/static";

// the generated stylesheet is served from memory, not from the static dir
pub const STYLESHEET_PATH: &str = "/assets/amber.css";

// static asset resolver
//
// catalog entries only carry bare file names; the folder depends on what the
// file is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset<'a> {
    Img(&'a str),
    Poster(&'a str),
    Star(&'a str),
}

impl fmt::Display for Asset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dir, file) = match self {
            Asset::Img(file) => ("img", file),
            Asset::Poster(file) => ("posters", file),
            Asset::Star(file) => ("stars", file),
        };

        let file = urlencoding::encode(file.trim_start_matches('/'));
        write!(f, "{STATIC_ROOT}/{dir}/{file}")
    }
}

impl Asset<'_> {
    // inline css for a full-bleed background; the url is already
    // percent-encoded, so the quotes cannot be closed from inside it
    pub fn background(&self) -> String {
        format!("background-image: url('{self}');")
    }
}
