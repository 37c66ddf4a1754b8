use dioxus::prelude::*;

use crate::{
    common::{format::escape_attr, theme::ColorToken},
    route::{Asset, Route, STYLESHEET_PATH},
};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const FONTS: &str = "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap";

pub const USER_MENU: [&str; 5] = ["Profile", "My Watchlists", "Settings", "Help", "Sign Out"];

pub const FOOTER_COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Browse", ["Movies", "Watchlists", "Directors"]),
    ("Company", ["About", "Careers", "Press"]),
    ("Support", ["Help Center", "Terms of Use", "Privacy"]),
];

// site-wide values the shell needs from the server config
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub title: String,
    pub person_id: String,
}

impl Default for Site {
    fn default() -> Self {
        Site {
            title: "Amber".to_owned(),
            person_id: "me".to_owned(),
        }
    }
}

// which entry of the primary nav is highlighted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavItem {
    #[default]
    None,
    Home,
    Library,
    Player,
    People,
}

#[derive(Clone, PartialEq, Props)]
pub struct BaseLayoutProps {
    site: Site,
    #[props(into)]
    title: String,
    #[props(default)]
    active: NavItem,
    children: Element,
}

// head and body of every page; the html root is written by the renderer
#[component]
pub fn BaseLayout(props: BaseLayoutProps) -> Element {
    let site = props.site;
    let title = props.title;
    let favicon = Asset::Img("favicon.png").to_string();
    let body_class = ColorToken::DarkBlue.bg_class();
    let description = escape_attr(&format!(
        "{} keeps track of the movies and watchlists in your library",
        site.title
    ));

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            meta { name: "description", content: description }
            title { "{title} | {site.title}" }
            link { rel: "icon", href: favicon }
            link { rel: "stylesheet", href: BOOTSTRAP_CSS }
            link { rel: "stylesheet", href: BOOTSTRAP_ICONS }
            link { rel: "stylesheet", href: FONTS }
            link { rel: "stylesheet", href: STYLESHEET_PATH }
        }
        body { class: body_class,
            SiteHeader { site: site.clone(), active: props.active }
            main { class: "page-content", {props.children} }
            SiteFooter { site: site.clone() }
            script { src: BOOTSTRAP_JS }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    name: &'static str,
    target: Route,
    active: bool,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let target = props.target.to_string();

    rsx! {
        li { class: "nav-item",
            a {
                class: if props.active { "nav-link active" } else { "nav-link" },
                href: target,
                "{props.name}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SiteHeaderProps {
    site: Site,
    active: NavItem,
}

#[component]
fn SiteHeader(props: SiteHeaderProps) -> Element {
    let site = props.site;
    let active = props.active;
    let logo = Asset::Img("logo.svg").to_string();
    let brand = escape_attr(&site.title);
    let avatar = Asset::Img("avatar.png").to_string();
    let people = Route::People {
        person_id: site.person_id.clone(),
    };

    rsx! {
        header { class: "site-header",
            nav { class: "site-nav",
                a { class: "navbar-brand", href: Route::Home.to_string(),
                    img { class: "logo", src: logo, alt: brand }
                }
                ul { class: "nav-primary",
                    NavLink { name: "Home", target: Route::Home, active: active == NavItem::Home }
                    NavLink { name: "Library", target: Route::Library, active: active == NavItem::Library }
                    NavLink { name: "Player", target: Route::Player, active: active == NavItem::Player }
                    NavLink { name: "People", target: people, active: active == NavItem::People }
                }
                form { class: "search-form", "role": "search",
                    input {
                        class: "search-input",
                        r#type: "search",
                        placeholder: "Search movies, watchlists, people",
                        "aria-label": "Search",
                    }
                }
                div { class: "user-menu dropdown",
                    button {
                        class: "btn dropdown-toggle",
                        r#type: "button",
                        "data-bs-toggle": "dropdown",
                        "aria-expanded": "false",
                        img { class: "avatar avatar-sm", src: avatar, alt: "Account" }
                    }
                    ul { class: "dropdown-menu dropdown-menu-end",
                        for item in USER_MENU {
                            li {
                                a { class: "dropdown-item", href: "#", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SiteFooterProps {
    site: Site,
}

#[component]
fn SiteFooter(props: SiteFooterProps) -> Element {
    let site = props.site;
    let muted = ColorToken::Silver.class();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                for (heading, links) in FOOTER_COLUMNS {
                    div { class: "footer-column",
                        h6 { "{heading}" }
                        ul {
                            for link in links {
                                li {
                                    a { class: muted, href: "#", "{link}" }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-column",
                    h6 { "Newsletter" }
                    form { class: "newsletter-form",
                        input {
                            class: "form-control",
                            r#type: "email",
                            placeholder: "Email address",
                            "aria-label": "Email address",
                        }
                        button { class: "btn btn-primary", r#type: "button", "Subscribe" }
                    }
                }
            }
            div { class: "footer-bottom",
                p { class: muted, "© {site.title}. All rights reserved." }
                div { class: "social-links",
                    a { href: "#", "aria-label": "X",
                        i { class: "bi bi-twitter-x" }
                    }
                    a { href: "#", "aria-label": "Instagram",
                        i { class: "bi bi-instagram" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(active: NavItem, content: Element) -> String {
        dioxus_ssr::render_element(rsx! {
            BaseLayout { site: Site::default(), title: "Home", active, {content} }
        })
    }

    #[test]
    fn shell_wraps_content() {
        let html = render(NavItem::Home, rsx! { p { id: "payload", "hello" } });

        assert!(html.contains("<title>Home | Amber</title>"));
        assert!(html.contains(r#"href="/assets/amber.css""#));

        let main = html.find("page-content").unwrap();
        let payload = html.find("payload").unwrap();
        let footer = html.find("site-footer").unwrap();
        assert!(main < payload && payload < footer);
    }

    #[test]
    fn nav_has_four_absolute_links() {
        let html = render(NavItem::Library, rsx! {});

        assert_eq!(html.matches(r#"class="nav-item""#).count(), 4);
        assert!(html.contains(r#"href="/library""#));
        assert!(html.contains(r#"href="/player""#));
        assert!(html.contains(r#"href="/people/me""#));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains(r#"<a class="nav-link active" href="/library">Library</a>"#));
    }

    #[test]
    fn empty_content_still_renders_shell() {
        let html = render(NavItem::None, rsx! {});

        assert!(html.contains(r#"<main class="page-content"></main>"#));
        assert!(!html.contains("nav-link active"));
        assert_eq!(html.matches(r#"class="dropdown-item""#).count(), USER_MENU.len());
        assert_eq!(html.matches(r#"class="footer-column""#).count(), 4);
        assert!(html.contains("bi-twitter-x"));
        assert!(html.contains("bi-instagram"));
        assert!(html.contains("All rights reserved."));
    }
}
