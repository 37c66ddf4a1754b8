use dioxus::prelude::*;

use crate::common::position::PositionExt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Separator {
    #[default]
    Dot,
    Comma,
}

impl Separator {
    pub fn glyph(self) -> &'static str {
        match self {
            Separator::Dot => "\u{00B7}",
            Separator::Comma => ",",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SeparatedListProps {
    items: Vec<String>,
    #[props(default)]
    separator: Separator,
    #[props(default, into)]
    class_name: String,
}

// renders "a · b · c": a separator goes after every item except the last
#[component]
pub fn SeparatedList(props: SeparatedListProps) -> Element {
    let glyph = props.separator.glyph();

    rsx! {
        span { class: "separated-list {props.class_name}",
            for item in props.items.iter().with_position() {
                span { class: "list-item", "{item.value}" }
                if !item.is_last() {
                    span { class: "separator", "{glyph}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(items: &[&str], separator: Separator) -> String {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();

        dioxus_ssr::render_element(rsx! {
            SeparatedList { items, separator }
        })
    }

    #[test]
    fn n_minus_one_separators() {
        let html = render(&["Adventure", "Fantasy", "Action"], Separator::Dot);

        assert_eq!(html.matches(r#"class="list-item""#).count(), 3);
        assert_eq!(html.matches(r#"class="separator""#).count(), 2);
        assert!(html.contains("\u{00B7}"));

        // never a trailing separator
        let last_item = html.rfind("Action").unwrap();
        assert!(html[last_item..].find(r#"class="separator""#).is_none());
    }

    #[test]
    fn single_item_has_no_separator() {
        let html = render(&["Christopher Nolan"], Separator::Dot);

        assert!(html.contains("Christopher Nolan"));
        assert_eq!(html.matches(r#"class="separator""#).count(), 0);
    }

    #[test]
    fn empty_list() {
        let html = render(&[], Separator::Comma);

        assert_eq!(html.matches(r#"class="list-item""#).count(), 0);
        assert_eq!(html.matches(r#"class="separator""#).count(), 0);
    }

    #[test]
    fn comma_separator() {
        let html = render(&["English", "French"], Separator::Comma);

        assert_eq!(html.matches(r#"class="separator""#).count(), 1);
        assert!(html.contains(r#"<span class="separator">,</span>"#));
    }
}
