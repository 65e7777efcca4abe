use std::borrow::Cow;
use std::fmt::Write;

use crate::feed::{Channel, NewsItem};

/// Display defaults substituted at render time for absent fields.
const EMPTY_TITLE: &str = "Empty Title";
const NO_DESCRIPTION: &str = "No Description";
const NO_DATE: &str = "No date available";
const NO_SOURCE: &str = "No source available";
const NO_TITLE: &str = "No title available";

/// Renders the HTML document: header block, one table row per item in
/// document order, footer. No sorting, filtering or deduplication.
///
/// All interpolated feed text and attribute values pass through
/// [`escape_html`], so hostile or merely sloppy feed content cannot break
/// the document structure. The `<head>`/`<body>` nesting is identical
/// whether or not the channel has a title.
pub fn render_html(channel: &Channel, items: &[NewsItem]) -> String {
    let mut out = String::new();

    let head_title = match channel.title.as_deref() {
        Some(title) => escape_html(title),
        None => Cow::Borrowed(EMPTY_TITLE),
    };
    let _ = writeln!(
        out,
        "<html><head><title>{}</title></head><body>",
        head_title
    );

    let heading = escape_html(channel.title.as_deref().unwrap_or_default());
    let _ = match channel.link.as_deref() {
        Some(link) => writeln!(out, "<h1><a href=\"{}\">{}</a></h1>", escape_html(link), heading),
        None => writeln!(out, "<h1>{}</h1>", heading),
    };

    let description = match channel.description.as_deref() {
        Some(description) => escape_html(description),
        None => Cow::Borrowed(NO_DESCRIPTION),
    };
    let _ = writeln!(out, "<p>{}</p>", description);

    let _ = writeln!(out, "<table border=\"1\">");
    let _ = writeln!(out, "<tr><th>Date</th><th>Source</th><th>News</th></tr>");
    for item in items {
        render_row(&mut out, item);
    }
    let _ = writeln!(out, "</table>");
    let _ = writeln!(out, "</body></html>");

    out
}

/// One `<tr>` with date, source and title cells, applying display defaults.
fn render_row(out: &mut String, item: &NewsItem) {
    let _ = writeln!(out, "<tr>");

    let date = match item.pub_date.as_deref() {
        Some(date) => escape_html(date),
        None => Cow::Borrowed(NO_DATE),
    };
    let _ = writeln!(out, "<td>{}</td>", date);

    let _ = match (item.source_name.as_deref(), item.source_url.as_deref()) {
        (Some(name), Some(url)) => writeln!(
            out,
            "<td><a href=\"{}\">{}</a></td>",
            escape_html(url),
            escape_html(name)
        ),
        (Some(name), None) => writeln!(out, "<td>{}</td>", escape_html(name)),
        (None, _) => writeln!(out, "<td>{}</td>", NO_SOURCE),
    };

    // The link wraps whatever the title cell shows, fallback text included.
    let title = match item.title.as_deref() {
        Some(title) => escape_html(title),
        None => Cow::Borrowed(NO_TITLE),
    };
    let _ = match item.link.as_deref() {
        Some(link) => writeln!(out, "<td><a href=\"{}\">{}</a></td>", escape_html(link), title),
        None => writeln!(out, "<td>{}</td>", title),
    };

    let _ = writeln!(out, "</tr>");
}

/// Escapes the five HTML-significant characters.
///
/// Returns `Cow::Borrowed` when the input needs no escaping (the common
/// case for feed text).
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let needs_escape = s
        .bytes()
        .any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''));
    if !needs_escape {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn channel() -> Channel {
        Channel {
            title: Some("Tech".to_string()),
            link: Some("http://x".to_string()),
            description: Some("D".to_string()),
        }
    }

    /// Asserts that `needles` appear in `haystack` in the given order.
    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match haystack[from..].find(needle) {
                Some(at) => from += at + needle.len(),
                None => panic!(
                    "expected {:?} after offset {} in:\n{}",
                    needle, from, haystack
                ),
            }
        }
    }

    #[test]
    fn test_header_rows_and_footer_in_order() {
        let items = vec![NewsItem {
            pub_date: Some("Mon".to_string()),
            title: Some("T".to_string()),
            link: Some("http://i".to_string()),
            ..NewsItem::default()
        }];

        let html = render_html(&channel(), &items);
        assert_in_order(
            &html,
            &[
                "<html><head><title>Tech</title></head><body>",
                "<h1><a href=\"http://x\">Tech</a></h1>",
                "<p>D</p>",
                "<table border=\"1\">",
                "<tr><th>Date</th><th>Source</th><th>News</th></tr>",
                "<tr>",
                "<td>Mon</td>",
                "<td>No source available</td>",
                "<td><a href=\"http://i\">T</a></td>",
                "</tr>",
                "</table>",
                "</body></html>",
            ],
        );
    }

    #[test]
    fn test_missing_title_uses_empty_title_fallback() {
        let channel = Channel {
            link: Some("http://x".to_string()),
            ..Channel::default()
        };

        let html = render_html(&channel, &[]);
        assert!(html.contains("<title>Empty Title</title>"));
        // The head closes and the body opens regardless of title presence.
        assert!(html.contains("</title></head><body>"));
        assert!(html.contains("<h1><a href=\"http://x\"></a></h1>"));
    }

    #[test]
    fn test_missing_description_fallback_verbatim() {
        let channel = Channel {
            title: Some("Tech".to_string()),
            ..Channel::default()
        };
        assert!(render_html(&channel, &[]).contains("<p>No Description</p>"));
    }

    #[test]
    fn test_missing_channel_link_renders_plain_heading() {
        let channel = Channel {
            title: Some("Tech".to_string()),
            ..Channel::default()
        };
        let html = render_html(&channel, &[]);
        assert!(html.contains("<h1>Tech</h1>"));
        assert!(!html.contains("<h1><a"));
    }

    #[test]
    fn test_row_fallbacks_for_empty_item() {
        let html = render_html(&channel(), &[NewsItem::default()]);
        assert_in_order(
            &html,
            &[
                "<td>No date available</td>",
                "<td>No source available</td>",
                "<td>No title available</td>",
            ],
        );
    }

    #[test]
    fn test_link_wraps_fallback_title() {
        let items = vec![NewsItem {
            link: Some("http://i".to_string()),
            ..NewsItem::default()
        }];
        let html = render_html(&channel(), &items);
        assert!(html.contains("<td><a href=\"http://i\">No title available</a></td>"));
    }

    #[test]
    fn test_source_with_url_renders_anchor() {
        let items = vec![NewsItem {
            source_name: Some("Reuters".to_string()),
            source_url: Some("http://s".to_string()),
            ..NewsItem::default()
        }];
        let html = render_html(&channel(), &items);
        assert!(html.contains("<td><a href=\"http://s\">Reuters</a></td>"));
    }

    #[test]
    fn test_source_without_url_renders_plain() {
        let items = vec![NewsItem {
            source_name: Some("AP".to_string()),
            ..NewsItem::default()
        }];
        let html = render_html(&channel(), &items);
        assert!(html.contains("<td>AP</td>"));
    }

    #[test]
    fn test_rows_follow_document_order() {
        let items: Vec<NewsItem> = ["first", "second", "third"]
            .iter()
            .map(|t| NewsItem {
                title: Some(t.to_string()),
                ..NewsItem::default()
            })
            .collect();

        let html = render_html(&channel(), &items);
        assert_in_order(&html, &["first", "second", "third"]);
    }

    #[test]
    fn test_feed_text_is_escaped() {
        let channel = Channel {
            title: Some("<script>alert(1)</script>".to_string()),
            link: Some("http://x?a=1&b=2".to_string()),
            description: Some("a < b".to_string()),
        };

        let html = render_html(&channel, &[]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("http://x?a=1&amp;b=2"));
        assert!(html.contains("<p>a &lt; b</p>"));
    }

    #[test]
    fn test_escape_html_clean_text_borrows() {
        let result = escape_html("plain text");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_html_all_five() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#39;"
        );
    }

    proptest! {
        /// No raw HTML-significant character survives escaping: every `&`
        /// in the output starts one of the five entities, and `<`, `>`,
        /// `"`, `'` never appear at all.
        #[test]
        fn prop_escaped_text_has_no_raw_specials(s in ".*") {
            let escaped = escape_html(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
            for (at, _) in escaped.match_indices('&') {
                let rest = &escaped[at..];
                prop_assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                        .iter()
                        .any(|entity| rest.starts_with(entity)),
                    "bare ampersand at {} in {:?}", at, escaped
                );
            }
        }
    }
}
