#![allow(non_snake_case)]

pub mod common;
pub mod components;
pub mod home;
pub mod library;
pub mod movie;
pub mod placeholder;
pub mod render;
pub mod route;
pub mod watchlist;

#[cfg(test)]
mod fixtures;

pub use components::layout::Site;
pub use render::{
    render_home, render_library, render_movie, render_not_found, render_people, render_player,
    render_watchlist, stylesheet,
};
