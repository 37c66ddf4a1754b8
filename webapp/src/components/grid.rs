use dioxus::prelude::*;

use super::card::{CardData, MediaCard, MovieCardLayout};
use crate::common::theme::ColorToken;
use api::{Movie, Watchlist};

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    heading: String,
    count: usize,
}

#[component]
fn SectionHeader(props: SectionHeaderProps) -> Element {
    let badge = ColorToken::Graphite.bg_class();

    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{props.heading}" }
            span { class: "section-count {badge}", "{props.count}" }
        }
        if props.count == 0 {
            p { class: "empty-grid", "Nothing here yet." }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MovieGridProps {
    #[props(into)]
    id: String,
    #[props(into)]
    heading: String,
    movies: Vec<Movie>,
    layout: MovieCardLayout,
}

#[component]
pub fn MovieGrid(props: MovieGridProps) -> Element {
    let layout = props.layout;

    rsx! {
        section { class: "card-section", id: "{props.id}",
            SectionHeader { heading: props.heading.clone(), count: props.movies.len() }
            div { class: "card-grid",
                for (index, movie) in props.movies.iter().enumerate() {
                    MediaCard { key: "{index}", card: CardData::movie(movie, layout) }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct WatchlistGridProps {
    #[props(into)]
    id: String,
    #[props(into)]
    heading: String,
    watchlists: Vec<Watchlist>,
}

#[component]
pub fn WatchlistGrid(props: WatchlistGridProps) -> Element {
    rsx! {
        section { class: "card-section", id: "{props.id}",
            SectionHeader { heading: props.heading.clone(), count: props.watchlists.len() }
            div { class: "card-grid watchlist-grid",
                for (index, watchlist) in props.watchlists.iter().enumerate() {
                    MediaCard { key: "{index}", card: CardData::watchlist(watchlist) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn one_card_per_movie_in_order() {
        let movies = vec![fixtures::movie(1, "Alpha"), fixtures::movie(2, "Beta"), fixtures::movie(3, "Gamma")];

        let html = dioxus_ssr::render_element(rsx! {
            MovieGrid { id: "popular", heading: "Popular", movies, layout: MovieCardLayout::Release }
        });

        assert_eq!(html.matches(r#"class="card movie-card""#).count(), 3);
        assert!(html.find("Alpha").unwrap() < html.find("Beta").unwrap());
        assert!(html.find("Beta").unwrap() < html.find("Gamma").unwrap());
        assert!(!html.contains("empty-grid"));
    }

    #[test]
    fn empty_grid_renders_without_cards() {
        let html = dioxus_ssr::render_element(rsx! {
            WatchlistGrid { id: "similar", heading: "Similar Watchlists", watchlists: Vec::new() }
        });

        assert!(html.contains("Similar Watchlists"));
        assert!(html.contains("empty-grid"));
        assert_eq!(html.matches("watchlist-card").count(), 0);
    }
}
