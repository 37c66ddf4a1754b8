use dioxus::prelude::*;

use crate::{
    common::theme::ColorToken,
    components::layout::{BaseLayout, NavItem, Site},
    route::Route,
};

#[derive(Clone, PartialEq, Props)]
pub struct PlaceholderPageProps {
    site: Site,
    #[props(into)]
    title: String,
    active: NavItem,
}

// the player and people pages live elsewhere; this only keeps their nav
// entries from dead-ending
#[component]
pub fn PlaceholderPage(props: PlaceholderPageProps) -> Element {
    let title = props.title;

    rsx! {
        BaseLayout { site: props.site, title: title.clone(), active: props.active,
            section { class: "placeholder-page",
                h1 { class: "section-title", "{title}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NotFoundPageProps {
    site: Site,
}

#[component]
pub fn NotFoundPage(props: NotFoundPageProps) -> Element {
    let muted = ColorToken::Silver.class();
    let home = Route::Home.to_string();

    rsx! {
        BaseLayout { site: props.site, title: "Page not found",
            section { class: "not-found",
                h1 { "Page not found" }
                p { class: muted, "There is nothing at this address." }
                a { class: "btn btn-primary", href: home, "Back to Home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_empty_section() {
        let html = dioxus_ssr::render_element(rsx! {
            PlaceholderPage { site: Site::default(), title: "Player", active: NavItem::Player }
        });

        assert!(html.contains("<title>Player | Amber</title>"));
        assert!(html.contains(r#"<h1 class="section-title">Player</h1>"#));
        assert!(html.contains(r#"<a class="nav-link active" href="/player">Player</a>"#));
    }

    #[test]
    fn not_found_links_home() {
        let html = dioxus_ssr::render_element(rsx! {
            NotFoundPage { site: Site::default() }
        });

        assert!(html.contains("Page not found"));
        assert!(!html.contains("nav-link active"));
    }
}
