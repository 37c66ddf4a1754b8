use dioxus::prelude::*;

use crate::{
    common::{
        format::{escape_attr, format_imdb, format_percent, format_rank},
        theme::{ButtonVariant, ColorToken},
    },
    components::{
        card::MovieCardLayout,
        cast::CastRow,
        grid::{MovieGrid, WatchlistGrid},
        layout::{BaseLayout, Site},
        list::{SeparatedList, Separator},
        rating::{RatingBadge, RatingSource},
    },
    route::Asset,
};
use api::page::MovieContext;

#[derive(Clone, PartialEq, Props)]
pub struct MoviePageProps {
    site: Site,
    ctx: MovieContext,
}

#[component]
pub fn MoviePage(props: MoviePageProps) -> Element {
    let ctx = props.ctx;
    let movie = ctx.movie;
    let muted = ColorToken::Silver.class();
    let accent = ColorToken::Orange.class();

    // without a poster there is neither a background nor a sidebar image
    let poster_file = Some(movie.poster_main.as_str()).filter(|file| !file.is_empty());
    let hero_style = poster_file
        .map(|file| Asset::Poster(file).background())
        .unwrap_or_default();
    let poster = poster_file.map(|file| Asset::Poster(file).to_string());
    let poster_alt = escape_attr(&movie.title);
    let rank = format_rank(movie.ranking as u64, ctx.num_of_movies);

    rsx! {
        BaseLayout { site: props.site, title: movie.title.clone(),
            section { class: "detail-hero", style: "{hero_style}",
                div { class: "hero-overlay" }
                div { class: "detail-content",
                    aside { class: "detail-sidebar",
                        if let Some(src) = poster {
                            img { class: "poster-main", src: src, alt: poster_alt }
                        }
                        div { class: "sidebar-actions",
                            button { class: ButtonVariant::Primary.class(), r#type: "button",
                                i { class: "bi bi-play-fill" }
                                " Play"
                            }
                            button { class: ButtonVariant::OutlineLight.class(), r#type: "button",
                                i { class: "bi bi-film" }
                                " Watch Trailer"
                            }
                        }
                    }
                    div { class: "detail-main",
                        div { class: "title-block",
                            h1 { class: "detail-title", "{movie.title}" }
                            div { class: "title-meta {muted}",
                                span { class: "year", "{movie.year}" }
                                SeparatedList { items: movie.genres.clone(), separator: Separator::Dot, class_name: "genres" }
                                span { class: "watch-count {accent}", "{movie.watch_count}x watched" }
                            }
                        }
                        div { class: "ratings-row",
                            SeparatedList { items: movie.directors.clone(), separator: Separator::Dot, class_name: "directors" }
                            RatingBadge { source: RatingSource::Imdb, value: format_imdb(movie.imdb_rating) }
                            RatingBadge {
                                source: RatingSource::RottenTomatoes,
                                value: format_percent(movie.rotten_tomatoes_rating),
                            }
                            span { class: "rank {accent}", "{rank}" }
                        }
                        p { class: "detail-description", "{movie.description}" }
                        CastRow { cast: movie.cast.clone() }
                    }
                }
            }
            WatchlistGrid { id: "featured-in", heading: "Featured in", watchlists: ctx.albums }
            MovieGrid {
                id: "similar-movies",
                heading: "Similar films",
                movies: ctx.similar_movies,
                layout: MovieCardLayout::Release,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn detail_page() {
        let mut movie = fixtures::movie(5, "Blade Runner 2049");
        movie.ranking = 4;
        movie.watch_count = 3;
        movie.genres = vec!["Drama".to_owned(), "Sci-Fi".to_owned()];

        let ctx = MovieContext {
            movie,
            similar_movies: vec![fixtures::movie(6, "Arrival")],
            albums: vec![fixtures::watchlist(2, "Villeneuve")],
            num_of_movies: 20,
        };

        let html = dioxus_ssr::render_element(rsx! {
            MoviePage { site: Site::default(), ctx }
        });

        assert!(html.contains("<title>Blade Runner 2049 | Amber</title>"));
        assert!(html.contains("background-image: url('/static/posters/5.jpg');"));
        assert!(html.contains(r#"src="/static/posters/5.jpg""#));
        assert!(html.contains("#4/20"));
        assert!(html.contains("3x watched"));
        assert!(html.find("Featured in").unwrap() < html.find("Similar films").unwrap());
        assert_eq!(html.matches("watchlist-card").count(), 1);
        assert_eq!(html.matches("movie-card").count(), 1);
    }

    #[test]
    fn missing_poster_renders_no_image() {
        let mut movie = fixtures::movie(9, "Untitled");
        movie.poster_main = String::new();

        let ctx = MovieContext {
            movie,
            similar_movies: Vec::new(),
            albums: Vec::new(),
            num_of_movies: 1,
        };

        let html = dioxus_ssr::render_element(rsx! {
            MoviePage { site: Site::default(), ctx }
        });

        assert!(!html.contains("background-image"));
        assert!(!html.contains("/static/posters/"));
        assert!(!html.contains("poster-main"));
    }
}
