use dioxus::prelude::*;

use crate::{
    common::{
        format::{escape_attr, format_imdb, format_percent},
        position::PositionExt,
        theme::{ButtonVariant, ColorToken},
    },
    components::{
        card::MovieCardLayout,
        cast::CastRow,
        grid::{MovieGrid, WatchlistGrid},
        layout::{BaseLayout, NavItem, Site},
        list::{SeparatedList, Separator},
        rating::{RatingBadge, RatingSource},
    },
    route::{Asset, Route},
};
use api::{Movie, page::HomeContext};

const CAROUSEL_ID: &str = "heroCarousel";

// the stack behind the main poster is cut off after this many layers
const POSTER_DEPTH: usize = 4;

#[derive(Clone, PartialEq, Props)]
pub struct HomePageProps {
    site: Site,
    ctx: HomeContext,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let ctx = props.ctx;

    rsx! {
        BaseLayout { site: props.site, title: "Home", active: NavItem::Home,
            MovieCarousel { movies: ctx.movies.clone() }
            MovieGrid {
                id: "continue-watching",
                heading: "Continue Watching",
                movies: ctx.movies.clone(),
                layout: MovieCardLayout::Progress,
            }
            MovieGrid {
                id: "popular",
                heading: "Popular",
                movies: ctx.movies.clone(),
                layout: MovieCardLayout::Release,
            }
            WatchlistGrid { id: "watchlists", heading: "Watchlists", watchlists: ctx.watchlists }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MovieCarouselProps {
    movies: Vec<Movie>,
}

// one slide and one indicator per movie, the first of each is active
#[component]
fn MovieCarousel(props: MovieCarouselProps) -> Element {
    if props.movies.is_empty() {
        return rsx! {};
    }

    let target = format!("#{CAROUSEL_ID}");

    rsx! {
        section {
            id: CAROUSEL_ID,
            class: "hero-carousel carousel slide",
            "data-bs-ride": "carousel",
            div { class: "carousel-indicators",
                for slide in props.movies.iter().with_position() {
                    button {
                        key: "{slide.index}",
                        r#type: "button",
                        class: if slide.is_first() { "active" } else { "" },
                        "data-bs-target": "{target}",
                        "data-bs-slide-to": "{slide.index}",
                        "aria-current": if slide.is_first() { "true" } else { "false" },
                        "aria-label": escape_attr(&slide.value.title),
                    }
                }
            }
            div { class: "carousel-inner",
                for slide in props.movies.iter().with_position() {
                    CarouselSlide {
                        key: "{slide.index}",
                        movie: slide.value.clone(),
                        active: slide.is_first(),
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CarouselSlideProps {
    movie: Movie,
    active: bool,
}

#[component]
fn CarouselSlide(props: CarouselSlideProps) -> Element {
    let movie = props.movie;
    let muted = ColorToken::Silver.class();
    let accent = ColorToken::Orange.class();
    let href = Route::Movie { id: movie.id }.to_string();
    let poster = Asset::Poster(&movie.poster_main).to_string();
    let poster_alt = escape_attr(&movie.title);
    let stack = movie
        .poster_stack
        .iter()
        .take(POSTER_DEPTH)
        .map(|file| Asset::Poster(file).to_string())
        .collect::<Vec<_>>();

    rsx! {
        div { class: if props.active { "carousel-item active" } else { "carousel-item" },
            div { class: "slide-content",
                div { class: "slide-info",
                    h1 { class: "slide-title", "{movie.title}" }
                    div { class: "slide-meta {muted}",
                        span { class: "year", "{movie.year}" }
                        SeparatedList { items: movie.genres.clone(), separator: Separator::Dot, class_name: "genres" }
                        span { class: "watch-count {accent}", "{movie.watch_count}x watched" }
                    }
                    div { class: "slide-directors",
                        SeparatedList { items: movie.directors.clone(), separator: Separator::Dot }
                    }
                    div { class: "slide-ratings",
                        RatingBadge { source: RatingSource::Imdb, value: format_imdb(movie.imdb_rating) }
                        RatingBadge {
                            source: RatingSource::RottenTomatoes,
                            value: format_percent(movie.rotten_tomatoes_rating),
                        }
                    }
                    p { class: "slide-description",
                        "{movie.description} "
                        a { class: "read-more {accent}", href: "#", "Read More" }
                    }
                    CastRow { cast: movie.cast.clone() }
                    div { class: "slide-actions",
                        a { class: ButtonVariant::Primary.class(), href: "{href}",
                            i { class: "bi bi-play-fill" }
                            " Continue Watching"
                        }
                        a { class: ButtonVariant::OutlineLight.class(), href: "#",
                            i { class: "bi bi-film" }
                            " Watch Trailer"
                        }
                    }
                }
                div { class: "slide-posters",
                    div { class: "poster-stack",
                        for (depth, file) in stack.iter().enumerate() {
                            img {
                                class: "poster-depth-{depth}",
                                src: "{file}",
                                alt: "",
                                "loading": "lazy",
                            }
                        }
                        img { class: "poster-main", src: poster, alt: poster_alt }
                    }
                }
            }
        }
    }
}
