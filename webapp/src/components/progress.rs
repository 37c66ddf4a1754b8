use dioxus::prelude::*;

use crate::common::theme::ColorToken;
use api::Percent;

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    percent: Percent,
    #[props(default = ColorToken::Orange)]
    color: ColorToken,
}

// the filled width is the percentage itself, so a 42 renders as "width: 42%;"
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = props.percent;
    let bar_class = props.color.bg_class();

    rsx! {
        div {
            class: "progress",
            "role": "progressbar",
            "aria-valuenow": "{percent}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            div { class: "progress-bar {bar_class}", style: "width: {percent}%;" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_matches_percentage() {
        let html = dioxus_ssr::render_element(rsx! {
            ProgressBar { percent: Percent::new(42) }
        });

        assert!(html.contains(r#"style="width: 42%;""#));
        assert!(html.contains(r#"aria-valuenow="42""#));
        assert!(html.contains("bg-orange"));
    }

    #[test]
    fn empty_and_full() {
        let empty = dioxus_ssr::render_element(rsx! {
            ProgressBar { percent: Percent::ZERO, color: ColorToken::Teal }
        });
        let full = dioxus_ssr::render_element(rsx! {
            ProgressBar { percent: Percent::FULL }
        });

        assert!(empty.contains("width: 0%;"));
        assert!(empty.contains("bg-teal"));
        assert!(full.contains("width: 100%;"));
    }
}
