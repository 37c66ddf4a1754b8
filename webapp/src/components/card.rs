use dioxus::prelude::*;

use super::{collage::PosterCollage, progress::ProgressBar};
use crate::{
    common::format::{escape_attr, format_imdb, pluralize},
    route::{Asset, Route},
};
use api::{Movie, Percent, Watchlist};

// one card component serves every grid on the site; CardData says which
// pieces a particular grid wants to show

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Movie,
    Watchlist,
}

impl CardKind {
    fn class(self) -> &'static str {
        match self {
            CardKind::Movie => "card movie-card",
            CardKind::Watchlist => "card watchlist-card",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardArt {
    Poster { file: String, alt: String },
    Collage { posters: Vec<String> },
}

// one entry of the secondary line under the title
#[derive(Clone, Debug, PartialEq)]
pub struct CardMeta {
    pub class: &'static str,
    pub text: String,
}

// which secondary line a movie card carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieCardLayout {
    // watched percentage and a progress bar ("Continue Watching")
    Progress,
    // year and imdb rating, no progress bar ("Popular", album grids)
    Release,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardData {
    pub kind: CardKind,
    pub href: String,
    pub art: CardArt,
    pub title: String,
    pub meta: Vec<CardMeta>,
    pub progress: Option<Percent>,
}

impl CardData {
    pub fn movie(movie: &Movie, layout: MovieCardLayout) -> Self {
        let (meta, progress) = match layout {
            MovieCardLayout::Progress => (
                vec![CardMeta {
                    class: "watched",
                    text: format!("{}% watched", movie.watched),
                }],
                Some(movie.watched),
            ),
            MovieCardLayout::Release => (
                vec![
                    CardMeta {
                        class: "year",
                        text: movie.year.to_string(),
                    },
                    CardMeta {
                        class: "imdb-score",
                        text: format_imdb(movie.imdb_rating),
                    },
                ],
                None,
            ),
        };

        CardData {
            kind: CardKind::Movie,
            href: Route::Movie { id: movie.id }.to_string(),
            art: CardArt::Poster {
                file: movie.poster_main.clone(),
                alt: movie.title.clone(),
            },
            title: movie.title.clone(),
            meta,
            progress,
        }
    }

    pub fn watchlist(watchlist: &Watchlist) -> Self {
        CardData {
            kind: CardKind::Watchlist,
            href: Route::Watchlist { id: watchlist.id }.to_string(),
            art: CardArt::Collage {
                posters: watchlist.posters.clone(),
            },
            title: watchlist.title.clone(),
            meta: vec![
                CardMeta {
                    class: "film-count",
                    text: pluralize(watchlist.film_count as usize, "film", "films"),
                },
                CardMeta {
                    class: "watched",
                    text: format!("{}% watched", watchlist.watched),
                },
            ],
            progress: Some(watchlist.watched),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MediaCardProps {
    card: CardData,
}

#[component]
pub fn MediaCard(props: MediaCardProps) -> Element {
    let card = props.card;
    let card_class = card.kind.class();
    let title_attr = escape_attr(&card.title);

    let art = match &card.art {
        CardArt::Poster { file, alt } => rsx! {
            img {
                class: "card-img-top poster",
                src: Asset::Poster(file).to_string(),
                alt: escape_attr(alt),
                "loading": "lazy",
            }
        },
        CardArt::Collage { posters } => rsx! {
            PosterCollage { posters: posters.clone() }
        },
    };

    rsx! {
        div { class: card_class,
            a { class: "card-link", href: "{card.href}", {art} }
            div { class: "card-body",
                h6 { class: "card-title text-truncate", "title": title_attr, "{card.title}" }
                div { class: "card-meta",
                    for meta in card.meta.iter() {
                        span { class: meta.class, "{meta.text}" }
                    }
                }
                if let Some(percent) = card.progress {
                    ProgressBar { percent }
                }
            }
        }
    }
}
