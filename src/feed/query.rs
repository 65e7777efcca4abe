use crate::xml::Element;

/// Finds the first direct child of `element` that is a tag node labeled
/// exactly `tag_name`, returning its index.
///
/// The scan covers direct children only — a deeper descendant with a
/// matching label is never found. Text-node children and tags with other
/// names are skipped. Matching is case-sensitive with no trimming.
///
/// Returns `None` when no direct child matches; callers must check before
/// indexing. Each call re-scans the children — there is no caching.
pub fn find_first_child_tag(element: &Element, tag_name: &str) -> Option<usize> {
    debug_assert!(element.is_tag(), "query target must be a tag node");
    debug_assert!(!tag_name.is_empty(), "tag name must be non-empty");

    element
        .children()
        .iter()
        .position(|child| child.is_tag() && child.label() == tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel_fixture() -> Element {
        Element::tag("channel")
            .with_child(Element::tag("language").with_child(Element::text("en-us")))
            .with_child(Element::text("stray text"))
            .with_child(Element::tag("title").with_child(Element::text("First")))
            .with_child(Element::tag("title").with_child(Element::text("Second")))
            .with_child(Element::tag("link"))
    }

    #[test]
    fn test_returns_first_match_in_document_order() {
        let channel = channel_fixture();
        assert_eq!(find_first_child_tag(&channel, "title"), Some(2));
    }

    #[test]
    fn test_skips_text_node_children() {
        let channel = channel_fixture();
        // The stray text node at index 1 never matches, even for a query
        // that equals its content.
        assert_eq!(find_first_child_tag(&channel, "stray text"), None);
    }

    #[test]
    fn test_none_when_no_child_matches() {
        let channel = channel_fixture();
        assert_eq!(find_first_child_tag(&channel, "description"), None);
    }

    #[test]
    fn test_direct_children_only() {
        let root = Element::tag("rss")
            .with_child(Element::tag("channel").with_child(Element::tag("title")));
        // <title> exists one level deeper; a depth-1 scan must not find it.
        assert_eq!(find_first_child_tag(&root, "title"), None);
        assert_eq!(find_first_child_tag(&root, "channel"), Some(0));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let channel = channel_fixture();
        assert_eq!(find_first_child_tag(&channel, "Title"), None);
    }

    #[test]
    fn test_empty_parent_has_no_matches() {
        let empty = Element::tag("channel");
        assert_eq!(find_first_child_tag(&empty, "title"), None);
    }
}
