use dioxus::prelude::*;

use crate::route::Asset;
use api::COLLAGE_MAX;

// number of collage columns for a poster count, or None when there is nothing
// to show.  more than four posters are cut down to the first four.
pub fn collage_columns(count: usize) -> Option<usize> {
    match count {
        0 => None,
        n => Some(n.min(COLLAGE_MAX)),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PosterCollageProps {
    posters: Vec<String>,
}

#[component]
pub fn PosterCollage(props: PosterCollageProps) -> Element {
    let Some(columns) = collage_columns(props.posters.len()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "poster-collage collage-{columns}",
            for poster in props.posters.iter().take(COLLAGE_MAX) {
                img {
                    class: "collage-img",
                    src: Asset::Poster(poster).to_string(),
                    alt: "",
                    "loading": "lazy",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(count: usize) -> String {
        let posters: Vec<String> = (0..count).map(|i| format!("p{i}.jpg")).collect();

        dioxus_ssr::render_element(rsx! {
            PosterCollage { posters }
        })
    }

    #[test]
    fn columns_are_clamped() {
        assert_eq!(collage_columns(0), None);
        assert_eq!(collage_columns(1), Some(1));
        assert_eq!(collage_columns(4), Some(4));
        assert_eq!(collage_columns(9), Some(4));
    }

    #[test]
    fn class_follows_poster_count() {
        for count in 1..=4 {
            let html = render(count);

            assert!(html.contains(&format!("poster-collage collage-{count}")));
            assert_eq!(html.matches(r#"class="collage-img""#).count(), count);
        }
    }

    #[test]
    fn only_first_four_posters() {
        let html = render(7);

        assert!(html.contains("collage-4"));
        assert_eq!(html.matches(r#"class="collage-img""#).count(), 4);
        assert!(html.contains("/static/posters/p3.jpg"));
        assert!(!html.contains("/static/posters/p4.jpg"));
    }

    #[test]
    fn empty_collage_renders_nothing() {
        assert!(!render(0).contains("poster-collage"));
    }
}
