// design tokens
//
// every color the pages use goes through ColorToken, so markup and stylesheet
// agree on the class names.  each token yields a text class (".orange"), a
// background class (".bg-orange") and a css custom property (--amber-orange).

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    DarkBlue,
    Navy,
    Midnight,
    Orange,
    Amber,
    Graphite,
    Slate,
    Silver,
    Snow,
    Crimson,
    Tomato,
    Gold,
    Teal,
}

impl ColorToken {
    pub const ALL: [ColorToken; 13] = [
        Self::DarkBlue,
        Self::Navy,
        Self::Midnight,
        Self::Orange,
        Self::Amber,
        Self::Graphite,
        Self::Slate,
        Self::Silver,
        Self::Snow,
        Self::Crimson,
        Self::Tomato,
        Self::Gold,
        Self::Teal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DarkBlue => "dark-blue",
            Self::Navy => "navy",
            Self::Midnight => "midnight",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Graphite => "graphite",
            Self::Slate => "slate",
            Self::Silver => "silver",
            Self::Snow => "snow",
            Self::Crimson => "crimson",
            Self::Tomato => "tomato",
            Self::Gold => "gold",
            Self::Teal => "teal",
        }
    }

    pub fn to_css_color(self) -> &'static str {
        match self {
            Self::DarkBlue => "#0B1320",
            Self::Navy => "#111C2E",
            Self::Midnight => "#070B14",
            Self::Orange => "#F47C20",
            Self::Amber => "#FFB547",
            Self::Graphite => "#8A94A6",
            Self::Slate => "#27324A",
            Self::Silver => "#C9D1DE",
            Self::Snow => "#F5F7FA",
            Self::Crimson => "#E0393E",
            Self::Tomato => "#FA320A",
            Self::Gold => "#F5C518",
            Self::Teal => "#1FB6A6",
        }
    }

    // the text color class
    pub fn class(self) -> &'static str {
        self.name()
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Self::DarkBlue => "bg-dark-blue",
            Self::Navy => "bg-navy",
            Self::Midnight => "bg-midnight",
            Self::Orange => "bg-orange",
            Self::Amber => "bg-amber",
            Self::Graphite => "bg-graphite",
            Self::Slate => "bg-slate",
            Self::Silver => "bg-silver",
            Self::Snow => "bg-snow",
            Self::Crimson => "bg-crimson",
            Self::Tomato => "bg-tomato",
            Self::Gold => "bg-gold",
            Self::Teal => "bg-teal",
        }
    }

    pub fn var(self) -> String {
        format!("var(--amber-{})", self.name())
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == value)
            .unwrap_or(Self::Graphite)
    }
}

// button variants, in the same vocabulary as the stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    OutlineLight,
    OutlineOrange,
    Dark,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::OutlineLight => "btn btn-outline-light",
            Self::OutlineOrange => "btn btn-outline-orange",
            Self::Dark => "btn btn-dark",
        }
    }
}

// the generated part of the stylesheet: custom properties plus one text and
// one background rule per token
pub fn token_css() -> String {
    let mut css = String::from("\n/* Color tokens */\n:root {\n");

    for token in ColorToken::ALL {
        css.push_str(&format!("  --amber-{}: {};\n", token.name(), token.to_css_color()));
    }
    css.push_str("}\n\n");

    for token in ColorToken::ALL {
        css.push_str(&format!(".{} {{ color: {} !important; }}\n", token.class(), token.var()));
    }
    css.push('\n');

    for token in ColorToken::ALL {
        css.push_str(&format!(
            ".{} {{ background-color: {} !important; }}\n",
            token.bg_class(),
            token.var()
        ));
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_has_a_matching_background_class() {
        for token in ColorToken::ALL {
            assert_eq!(token.bg_class(), format!("bg-{}", token.class()));
        }
    }

    #[test]
    fn names_round_trip() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from(token.name()), token);
        }
        assert_eq!(ColorToken::from("chartreuse"), ColorToken::Graphite);
    }

    #[test]
    fn generated_rules() {
        let css = token_css();

        assert!(css.contains("--amber-dark-blue: #0B1320;"));
        assert!(css.contains(".orange { color: var(--amber-orange) !important; }"));
        assert!(css.contains(".bg-graphite { background-color: var(--amber-graphite) !important; }"));
        assert_eq!(css.matches("background-color").count(), ColorToken::ALL.len());
    }

    #[test]
    fn button_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::OutlineLight.class(), "btn btn-outline-light");
    }
}
