pub mod movie;
pub mod page;
pub mod percent;
pub mod watchlist;

pub use movie::{Actor, Movie, MovieId};
pub use percent::Percent;
pub use watchlist::{Watchlist, WatchlistId};

// number of related items shown in the "similar" grids on the detail pages
pub const SIMILAR_LIMIT: usize = 6;

// the collage never shows more than this many posters
pub const COLLAGE_MAX: usize = 4;
