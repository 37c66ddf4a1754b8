use dioxus::prelude::*;

use crate::{
    common::theme::ColorToken,
    components::{
        card::MovieCardLayout,
        grid::{MovieGrid, WatchlistGrid},
        layout::{BaseLayout, NavItem, Site},
    },
};
use api::page::{DirectorRank, LibraryContext};

#[derive(Clone, PartialEq, Props)]
pub struct LibraryPageProps {
    site: Site,
    ctx: LibraryContext,
}

#[component]
pub fn LibraryPage(props: LibraryPageProps) -> Element {
    let ctx = props.ctx;

    rsx! {
        BaseLayout { site: props.site, title: "Library", active: NavItem::Library,
            section { class: "library-summary",
                SummaryStat { label: "Movies", value: ctx.num_of_movies }
                SummaryStat { label: "Watchlists", value: ctx.num_of_watchlists }
                SummaryStat { label: "Directors", value: ctx.num_of_directors }
            }
            MovieGrid {
                id: "library-movies",
                heading: "Movies",
                movies: ctx.movies,
                layout: MovieCardLayout::Release,
            }
            WatchlistGrid { id: "library-watchlists", heading: "Watchlists", watchlists: ctx.watchlists }
            DirectorList { directors: ctx.directors }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SummaryStatProps {
    label: &'static str,
    value: usize,
}

#[component]
fn SummaryStat(props: SummaryStatProps) -> Element {
    let accent = ColorToken::Orange.class();

    rsx! {
        div { class: "summary-stat",
            span { class: "stat-value {accent}", "{props.value}" }
            span { class: "stat-label", "{props.label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DirectorListProps {
    directors: Vec<DirectorRank>,
}

// directors arrive already ranked, the list only numbers them
#[component]
fn DirectorList(props: DirectorListProps) -> Element {
    let badge = ColorToken::Amber.bg_class();

    rsx! {
        section { class: "card-section", id: "directors",
            div { class: "section-header",
                h2 { class: "section-title", "Directors" }
            }
            ol { class: "director-list list-group",
                for (position, director) in (1usize..).zip(props.directors.iter()) {
                    li { key: "{position}", class: "list-group-item",
                        span { class: "director-position", "{position}" }
                        span { class: "director-name", "{director.name}" }
                        span { class: "director-score badge {badge}", "{director.score}" }
                    }
                }
            }
        }
    }
}
