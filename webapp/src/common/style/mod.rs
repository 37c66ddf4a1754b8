use std::sync::LazyLock;

use constcat::concat;

use super::theme;

mod components;
mod detail;
mod home;
mod layout;
mod variables;

pub use components::BASE_COMPONENTS;
pub use detail::DETAIL_STYLES;
pub use home::HOME_STYLES;
pub use layout::LAYOUT_STYLES;
pub use variables::CSS_VARIABLES;

// the hand-written part of the stylesheet
pub const STATIC_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
*,
*::before,
*::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: var(--font-body);
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  color: var(--primary-light);
}

img {
  max-width: 100%;
  display: block;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LAYOUT_STYLES,
    HOME_STYLES,
    DETAIL_STYLES
);

// full stylesheet, generated token rules first so everything below can use them
pub static STYLESHEET: LazyLock<String> =
    LazyLock::new(|| format!("{}{}", theme::token_css(), STATIC_STYLES));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::theme::ColorToken;

    #[test]
    fn stylesheet_covers_class_contract() {
        let css = STYLESHEET.as_str();

        for selector in [
            ".btn-primary",
            ".btn-secondary",
            ".btn-outline-light",
            ".card",
            ".watchlist-card",
            ".list-group-item",
            ".poster-collage",
            ".collage-1",
            ".collage-2",
            ".collage-3",
            ".collage-4",
            ".progress-bar",
            ".text-truncate",
        ] {
            assert!(css.contains(selector), "missing {selector}");
        }

        for token in ColorToken::ALL {
            assert!(css.contains(&format!(".{} {{", token.class())));
            assert!(css.contains(&format!(".{} {{", token.bg_class())));
        }
    }

    #[test]
    fn braces_balance() {
        let css = STYLESHEET.as_str();

        assert_eq!(css.matches('{').count(), css.matches('}').count());
    }
}
