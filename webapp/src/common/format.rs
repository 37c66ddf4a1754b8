use api::Percent;

// display helpers shared by the pages

pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

pub fn format_currency(value: u64) -> String {
    format!("${}", format_thousands(value))
}

// absent values render as an empty string rather than a zero that looks real
pub fn format_imdb(rating: Option<f32>) -> String {
    rating.map(|r| format!("{r:.1}")).unwrap_or_default()
}

pub fn format_percent(value: Option<Percent>) -> String {
    value.map(|p| format!("{p}%")).unwrap_or_default()
}

pub fn format_rank(position: u64, total: usize) -> String {
    format!("#{position}/{total}")
}

// attribute values are written verbatim by the renderer, only text nodes are
// escaped for us
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }

    out
}

pub fn pluralize(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
    }

    #[test]
    fn currency() {
        assert_eq!(format_currency(1234567), "$1,234,567");
        assert_eq!(format_currency(42), "$42");
    }

    #[test]
    fn ratings() {
        assert_eq!(format_imdb(Some(8.6)), "8.6");
        assert_eq!(format_imdb(Some(7.0)), "7.0");
        assert_eq!(format_imdb(None), "");
        assert_eq!(format_percent(Some(Percent::new(95))), "95%");
        assert_eq!(format_percent(None), "");
    }

    #[test]
    fn rank() {
        assert_eq!(format_rank(3, 12), "#3/12");
    }

    #[test]
    fn attribute_escaping() {
        assert_eq!(escape_attr("Heat"), "Heat");
        assert_eq!(
            escape_attr(r#"The "Burbs <b> & co"#),
            "The &quot;Burbs &lt;b&gt; &amp; co"
        );
        assert_eq!(escape_attr("Ocean's"), "Ocean&#39;s");
    }

    #[test]
    fn plurals() {
        assert_eq!(pluralize(1, "film", "films"), "1 film");
        assert_eq!(pluralize(0, "film", "films"), "0 films");
        assert_eq!(pluralize(12, "film", "films"), "12 films");
    }
}
