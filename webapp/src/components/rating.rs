use dioxus::prelude::*;

use crate::route::Asset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingSource {
    Imdb,
    RottenTomatoes,
}

impl RatingSource {
    fn class(self) -> &'static str {
        match self {
            RatingSource::Imdb => "imdb",
            RatingSource::RottenTomatoes => "rotten-tomatoes",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            RatingSource::Imdb => "imdb.png",
            RatingSource::RottenTomatoes => "rotten-tomatoes.png",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RatingSource::Imdb => "IMDb",
            RatingSource::RottenTomatoes => "Rotten Tomatoes",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RatingBadgeProps {
    source: RatingSource,
    value: String,
}

#[component]
pub fn RatingBadge(props: RatingBadgeProps) -> Element {
    let source = props.source;
    let class = source.class();
    let label = source.label();
    let icon = Asset::Img(source.icon()).to_string();

    rsx! {
        span { class: "rating-badge {class}",
            img { src: icon, alt: "{label}" }
            span { class: "rating-value", "{props.value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: RatingSource, value: &str) -> String {
        let value = value.to_owned();

        dioxus_ssr::render_element(rsx! {
            RatingBadge { source, value }
        })
    }

    #[test]
    fn imdb_badge() {
        let html = render(RatingSource::Imdb, "8.6");

        assert!(html.contains(r#"class="rating-badge imdb""#));
        assert!(html.contains("/static/img/imdb.png"));
        assert!(html.contains(r#"alt="IMDb""#));
        assert!(html.contains(r#"<span class="rating-value">8.6</span>"#));
    }

    #[test]
    fn rotten_tomatoes_badge() {
        let html = render(RatingSource::RottenTomatoes, "95%");

        assert!(html.contains(r#"class="rating-badge rotten-tomatoes""#));
        assert!(html.contains("/static/img/rotten-tomatoes.png"));
        assert!(html.contains("95%"));
    }

    #[test]
    fn absent_rating_keeps_badge_empty() {
        let html = render(RatingSource::Imdb, "");

        assert!(html.contains(r#"class="rating-badge imdb""#));
        assert!(html.contains(r#"<span class="rating-value"></span>"#));
    }
}
