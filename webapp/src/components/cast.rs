use dioxus::prelude::*;

use crate::{
    common::{format::escape_attr, theme::ColorToken},
    route::Asset,
};
use api::Actor;

#[derive(Clone, PartialEq, Props)]
pub struct CastRowProps {
    cast: Vec<Actor>,
}

#[component]
pub fn CastRow(props: CastRowProps) -> Element {
    let role_class = ColorToken::Graphite.class();

    rsx! {
        ul { class: "cast-list",
            for actor in props.cast.iter() {
                li { class: "cast-member",
                    img {
                        class: "avatar",
                        src: Asset::Star(&actor.image).to_string(),
                        alt: escape_attr(&actor.name),
                    }
                    div { class: "cast-text",
                        span { class: "cast-name", "{actor.name}" }
                        small { class: "cast-role {role_class}", "{actor.role}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_avatar_per_actor_in_order() {
        let cast = vec![
            Actor {
                image: "nolan.jpg".to_owned(),
                name: "CHRISTOPHER NOLAN".to_owned(),
                role: "Director".to_owned(),
            },
            Actor {
                image: "pitt.jpeg".to_owned(),
                name: "BRAD PITT".to_owned(),
                role: "John Carter".to_owned(),
            },
        ];

        let html = dioxus_ssr::render_element(rsx! {
            CastRow { cast }
        });

        assert_eq!(html.matches(r#"class="cast-member""#).count(), 2);
        assert!(html.contains("/static/stars/nolan.jpg"));
        assert!(html.find("CHRISTOPHER NOLAN").unwrap() < html.find("BRAD PITT").unwrap());
    }
}
