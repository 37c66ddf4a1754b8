use dioxus::prelude::*;

use crate::{
    common::{
        format::{format_currency, format_imdb, format_percent, format_rank, pluralize},
        theme::{ButtonVariant, ColorToken},
    },
    components::{
        card::MovieCardLayout,
        cast::CastRow,
        collage::PosterCollage,
        grid::{MovieGrid, WatchlistGrid},
        layout::{BaseLayout, Site},
        list::{SeparatedList, Separator},
        rating::{RatingBadge, RatingSource},
    },
    route::Asset,
};
use api::page::WatchlistContext;

// the sidebar buttons carry no behaviour on this page
pub const SIDEBAR_ACTIONS: [(&str, &str, ButtonVariant); 7] = [
    ("Watch Trailer", "bi-film", ButtonVariant::Primary),
    ("Continue Watching", "bi-play-fill", ButtonVariant::OutlineOrange),
    ("Download", "bi-download", ButtonVariant::Dark),
    ("Edit Details", "bi-pencil", ButtonVariant::Dark),
    ("Add to Watchlist", "bi-plus-lg", ButtonVariant::Dark),
    ("Directory", "bi-folder2-open", ButtonVariant::Dark),
    ("Share", "bi-share", ButtonVariant::Dark),
];

#[derive(Clone, PartialEq, Props)]
pub struct WatchlistPageProps {
    site: Site,
    ctx: WatchlistContext,
}

#[component]
pub fn WatchlistPage(props: WatchlistPageProps) -> Element {
    let ctx = props.ctx;
    let watchlist = ctx.watchlist;
    let muted = ColorToken::Silver.class();
    let accent = ColorToken::Orange.class();

    // no posters means no background, the overlay alone is still drawn
    let hero_style = watchlist
        .hero_poster()
        .map(|file| Asset::Poster(file).background())
        .unwrap_or_default();

    let rank = format_rank(watchlist.id, ctx.num_of_watchlists);
    let boxoffice = watchlist.boxoffice.map(format_currency).unwrap_or_default();
    let album_heading = format!("Films in {}", watchlist.title);
    let album_size = format!(
        "{} in this watchlist",
        pluralize(ctx.album_size, "film", "films")
    );

    rsx! {
        BaseLayout { site: props.site, title: watchlist.title.clone(),
            section { class: "detail-hero", style: "{hero_style}",
                div { class: "hero-overlay" }
                div { class: "detail-content",
                    aside { class: "detail-sidebar",
                        PosterCollage { posters: watchlist.posters.clone() }
                        div { class: "sidebar-actions",
                            for (label, icon, variant) in SIDEBAR_ACTIONS {
                                button { class: variant.class(), r#type: "button",
                                    i { class: "bi {icon}" }
                                    " {label}"
                                }
                            }
                        }
                    }
                    div { class: "detail-main",
                        div { class: "title-block",
                            span { class: "detail-type {accent}", "{watchlist.kind}" }
                            h1 { class: "detail-title", "{watchlist.title}" }
                            div { class: "title-meta {muted}",
                                span { class: "era", "{watchlist.era}" }
                                span { class: "age-rating", "{watchlist.age_rating}" }
                                SeparatedList { items: watchlist.genres.clone(), separator: Separator::Dot, class_name: "genres" }
                                span { class: "watch-count", "{watchlist.watch_count}x watched" }
                            }
                        }
                        div { class: "ratings-row",
                            SeparatedList { items: watchlist.directors.clone(), separator: Separator::Dot, class_name: "directors" }
                            RatingBadge { source: RatingSource::Imdb, value: format_imdb(watchlist.imdb_rating) }
                            RatingBadge {
                                source: RatingSource::RottenTomatoes,
                                value: format_percent(watchlist.rotten_tomatoes_rating),
                            }
                            span { class: "rank {accent}", "{rank}" }
                        }
                        ul { class: "detail-meta list-group",
                            MetaItem { label: "Films", "{watchlist.film_count}" }
                            MetaItem { label: "Released", "{watchlist.released}" }
                            MetaItem { label: "Runtime", "{watchlist.total_runtime}" }
                            MetaItem { label: "Writers",
                                SeparatedList { items: watchlist.writers.clone(), separator: Separator::Comma }
                            }
                            MetaItem { label: "Languages",
                                SeparatedList { items: watchlist.languages.clone(), separator: Separator::Comma }
                            }
                            MetaItem { label: "Countries",
                                SeparatedList { items: watchlist.countries.clone(), separator: Separator::Comma }
                            }
                            MetaItem { label: "Genres",
                                SeparatedList { items: watchlist.genres.clone(), separator: Separator::Comma }
                            }
                            MetaItem { label: "Box Office", span { class: "boxoffice", "{boxoffice}" } }
                        }
                        p { class: "detail-description", "{watchlist.description}" }
                        CastRow { cast: watchlist.cast.clone() }
                    }
                }
            }
            MovieGrid {
                id: "album",
                heading: album_heading,
                movies: ctx.album_movies,
                layout: MovieCardLayout::Release,
            }
            p { class: "album-size {muted}", "{album_size}" }
            WatchlistGrid {
                id: "similar-watchlists",
                heading: "Similar Watchlists",
                watchlists: ctx.similar_watchlists,
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MetaItemProps {
    label: &'static str,
    children: Element,
}

#[component]
fn MetaItem(props: MetaItemProps) -> Element {
    rsx! {
        li { class: "list-group-item",
            span { class: "meta-label", "{props.label}" }
            span { class: "meta-value", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn context() -> WatchlistContext {
        let mut watchlist = fixtures::watchlist(3, "The Dark Knight Trilogy");
        watchlist.kind = "Trilogy".to_owned();
        watchlist.posters = vec!["tdk1.jpg".to_owned(), "tdk2.jpg".to_owned()];
        watchlist.boxoffice = Some(1234567);
        watchlist.writers = vec!["Jonathan Nolan".to_owned(), "David S. Goyer".to_owned()];

        WatchlistContext {
            watchlist,
            album_movies: vec![fixtures::movie(10, "Batman Begins"), fixtures::movie(11, "The Dark Knight")],
            similar_watchlists: Vec::new(),
            num_of_watchlists: 12,
            album_size: 2,
        }
    }

    fn render(ctx: WatchlistContext) -> String {
        dioxus_ssr::render_element(rsx! {
            WatchlistPage { site: Site::default(), ctx }
        })
    }

    #[test]
    fn rank_and_boxoffice() {
        let html = render(context());

        assert!(html.contains("#3/12"));
        assert!(html.contains("$1,234,567"));
        assert!(html.contains("<title>The Dark Knight Trilogy | Amber</title>"));
    }

    #[test]
    fn hero_and_sidebar() {
        let html = render(context());

        assert!(html.contains("background-image: url('/static/posters/tdk1.jpg');"));
        assert!(html.contains("hero-overlay"));
        assert!(html.contains("collage-2"));
        assert_eq!(html.matches(r#"class="collage-img""#).count(), 2);

        let sidebar = html.find("sidebar-actions").unwrap();
        let main = html.find("detail-main").unwrap();
        assert_eq!(html[sidebar..main].matches("<button").count(), SIDEBAR_ACTIONS.len());
    }

    #[test]
    fn writers_are_comma_separated() {
        let html = render(context());

        assert!(html.contains(
            r#"<span class="list-item">Jonathan Nolan</span><span class="separator">,</span><span class="list-item">David S. Goyer</span>"#
        ));
    }

    #[test]
    fn grids() {
        let html = render(context());

        assert!(html.contains("Films in The Dark Knight Trilogy"));
        assert_eq!(html.matches("movie-card").count(), 2);
        assert_eq!(html.matches("watchlist-card").count(), 0);
        assert!(html.contains("Similar Watchlists"));
    }

    #[test]
    fn hero_survives_awkward_file_names() {
        let mut ctx = context();
        ctx.watchlist.posters = vec!["dark knight (2008).jpg".to_owned()];

        let html = render(ctx);

        assert!(html.contains(
            "background-image: url('/static/posters/dark%20knight%20%282008%29.jpg');"
        ));
    }

    #[test]
    fn album_size_is_pluralized() {
        let mut ctx = context();
        ctx.album_size = 1;

        let html = render(ctx);

        assert!(html.contains("1 film in this watchlist"));
        assert!(!html.contains("1 films"));
    }

    #[test]
    fn sparse_watchlist_degrades() {
        let ctx = WatchlistContext {
            watchlist: fixtures::watchlist(1, "Empty"),
            album_movies: Vec::new(),
            similar_watchlists: Vec::new(),
            num_of_watchlists: 1,
            album_size: 0,
        };

        let html = render(ctx);

        assert!(html.contains("hero-overlay"));
        assert!(!html.contains("background-image"));
        assert!(!html.contains("poster-collage"));
        assert!(html.contains("#1/1"));
        assert!(html.contains(r#"<span class="boxoffice"></span>"#));
    }
}
