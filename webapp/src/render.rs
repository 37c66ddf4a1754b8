use dioxus::prelude::*;
use tracing::debug;

use crate::{
    common::style::STYLESHEET,
    components::layout::{NavItem, Site},
    home::HomePage,
    library::LibraryPage,
    movie::MoviePage,
    placeholder::{NotFoundPage, PlaceholderPage},
    watchlist::WatchlistPage,
};
use api::page::{HomeContext, LibraryContext, MovieContext, WatchlistContext};

// server-side entry points
//
// every page renders into a fresh virtual dom, so renders share nothing and
// can run concurrently on any request task

const DOCTYPE: &str = "<!DOCTYPE html>";

fn document(page: &str, element: Element) -> String {
    let body = dioxus_ssr::render_element(element);
    debug!(page, bytes = body.len(), "rendered page");

    format!("{DOCTYPE}<html lang=\"en\">{body}</html>")
}

pub fn render_home(site: &Site, ctx: HomeContext) -> String {
    let site = site.clone();
    document("home", rsx! { HomePage { site, ctx } })
}

pub fn render_library(site: &Site, ctx: LibraryContext) -> String {
    let site = site.clone();
    document("library", rsx! { LibraryPage { site, ctx } })
}

pub fn render_watchlist(site: &Site, ctx: WatchlistContext) -> String {
    let site = site.clone();
    document("watchlist", rsx! { WatchlistPage { site, ctx } })
}

pub fn render_movie(site: &Site, ctx: MovieContext) -> String {
    let site = site.clone();
    document("movie", rsx! { MoviePage { site, ctx } })
}

pub fn render_player(site: &Site) -> String {
    let site = site.clone();
    document(
        "player",
        rsx! { PlaceholderPage { site, title: "Player", active: NavItem::Player } },
    )
}

pub fn render_people(site: &Site, person_id: &str) -> String {
    let site = Site {
        person_id: person_id.to_owned(),
        ..site.clone()
    };
    document(
        "people",
        rsx! { PlaceholderPage { site, title: "People", active: NavItem::People } },
    )
}

pub fn render_not_found(site: &Site) -> String {
    let site = site.clone();
    document("not_found", rsx! { NotFoundPage { site } })
}

pub fn stylesheet() -> &'static str {
    STYLESHEET.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn pages_start_with_doctype() {
        let site = Site::default();
        let ctx = HomeContext {
            movies: vec![fixtures::movie(1, "Heat")],
            watchlists: Vec::new(),
        };

        for html in [render_home(&site, ctx), render_player(&site), render_not_found(&site)] {
            assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en"><head>"#));
            assert!(html.ends_with("</html>"));
        }
    }

    #[test]
    fn people_link_follows_requested_person() {
        let html = render_people(&Site::default(), "ada");

        assert!(html.contains(r#"<a class="nav-link active" href="/people/ada">People</a>"#));
    }

    #[test]
    fn person_id_cannot_break_out_of_href() {
        let html = render_people(&Site::default(), r#""><img src=x onerror=alert(1)>"#);

        assert!(!html.contains("<img src=x"));
        assert!(html.contains(r#"href="/people/%22%3E%3Cimg"#));
    }

    #[test]
    fn stylesheet_carries_tokens() {
        let css = stylesheet();

        assert!(css.contains("--amber-orange"));
        assert!(css.contains(".poster-collage"));
    }
}
