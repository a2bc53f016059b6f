//! Matcher for a single `#EXTINF` line.
//!
//! Only one shape is accepted, with the attributes in this exact order:
//!
//! ```text
//! #EXTINF:-1 tvg-id="<id>" tvg-name="<name>" tvg-logo="<logo>",<display name>
//! ```
//!
//! Attribute values may be empty but cannot contain `"`. The display name runs
//! to the end of the line and must not be empty.

/// Tag that opens every entry's metadata line.
pub const EXTINF_TAG: &str = "#EXTINF:";

/// Duration placeholder the playlist uses for live channels.
const LIVE_DURATION: &str = "-1";

/// Fields captured from a matching `#EXTINF` line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtInf<'a> {
    pub tvg_id: &'a str,
    pub tvg_name: &'a str,
    pub tvg_logo: &'a str,
    pub display_name: &'a str,
}

/// Match `line` against the `#EXTINF` pattern.
///
/// The pattern may start anywhere in the line; the first position where it
/// matches completely wins. Returns `None` for wrong attribute order, missing
/// quotes, a missing comma or an empty display name.
pub fn parse_extinf(line: &str) -> Option<ExtInf<'_>> {
    line.match_indices(EXTINF_TAG)
        .find_map(|(start, _)| match_at(&line[start..]))
}

fn match_at(s: &str) -> Option<ExtInf<'_>> {
    let rest = s.strip_prefix(EXTINF_TAG)?.strip_prefix(LIVE_DURATION)?;
    let (tvg_id, rest) = quoted_attr(rest, " tvg-id=")?;
    let (tvg_name, rest) = quoted_attr(rest, " tvg-name=")?;
    let (tvg_logo, rest) = quoted_attr(rest, " tvg-logo=")?;

    let display_name = rest.strip_prefix(',')?;
    if display_name.is_empty() {
        return None;
    }

    Some(ExtInf {
        tvg_id,
        tvg_name,
        tvg_logo,
        display_name,
    })
}

/// Consume `key"value"` from the front of `s`, returning the value and the
/// remainder after the closing quote.
fn quoted_attr<'a>(s: &'a str, key: &str) -> Option<(&'a str, &'a str)> {
    let rest = s.strip_prefix(key)?.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some((&rest[..end], &rest[end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_full_line() {
        let line = r#"#EXTINF:-1 tvg-id="2x2id" tvg-name="2x2_English" tvg-logo="http://x/logo.png",2x2 English"#;
        let info = parse_extinf(line).unwrap();
        assert_eq!(info.tvg_id, "2x2id");
        assert_eq!(info.tvg_name, "2x2_English");
        assert_eq!(info.tvg_logo, "http://x/logo.png");
        assert_eq!(info.display_name, "2x2 English");
    }

    #[test]
    fn accepts_empty_attribute_values() {
        let info = parse_extinf(r#"#EXTINF:-1 tvg-id="" tvg-name="" tvg-logo="",Nameless"#).unwrap();
        assert_eq!(info.tvg_id, "");
        assert_eq!(info.tvg_name, "");
        assert_eq!(info.tvg_logo, "");
        assert_eq!(info.display_name, "Nameless");
    }

    #[test]
    fn display_name_keeps_commas_and_quotes() {
        let info =
            parse_extinf(r#"#EXTINF:-1 tvg-id="a" tvg-name="b" tvg-logo="c",News, "Live""#).unwrap();
        assert_eq!(info.display_name, r#"News, "Live""#);
    }

    #[test]
    fn rejects_wrong_attribute_order() {
        assert!(parse_extinf(r#"#EXTINF:-1 tvg-name="b" tvg-id="a" tvg-logo="c",B"#).is_none());
    }

    #[test]
    fn rejects_missing_quote() {
        assert!(parse_extinf(r#"#EXTINF:-1 tvg-id="a tvg-name="b" tvg-logo="c",B"#).is_none());
        assert!(parse_extinf(r#"#EXTINF:-1 tvg-id="a" tvg-name="b" tvg-logo="c,B"#).is_none());
    }

    #[test]
    fn rejects_other_durations() {
        assert!(parse_extinf(r#"#EXTINF:10 tvg-id="a" tvg-name="b" tvg-logo="c",B"#).is_none());
        assert!(parse_extinf(r#"#EXTINF:-1,Plain title"#).is_none());
    }

    #[test]
    fn rejects_empty_display_name() {
        assert!(parse_extinf(r#"#EXTINF:-1 tvg-id="a" tvg-name="b" tvg-logo="c","#).is_none());
        assert!(parse_extinf(r#"#EXTINF:-1 tvg-id="a" tvg-name="b" tvg-logo="c""#).is_none());
    }

    #[test]
    fn rejects_extra_attribute_between_fields() {
        let line = r#"#EXTINF:-1 tvg-id="a" group-title="g" tvg-name="b" tvg-logo="c",B"#;
        assert!(parse_extinf(line).is_none());
    }

    #[test]
    fn finds_pattern_later_in_line() {
        let line = r#"#EXTINF:0 junk #EXTINF:-1 tvg-id="a" tvg-name="b" tvg-logo="c",B"#;
        let info = parse_extinf(line).unwrap();
        assert_eq!(info.tvg_name, "b");
        assert_eq!(info.display_name, "B");
    }
}
