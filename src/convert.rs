//! Pipeline entry points: validate the document, extract, render.
//!
//! Both conversions are atomic: validation runs before any extraction or
//! rendering, so a malformed feed produces an error and nothing else. Each
//! invocation builds fresh [`Channel`]/[`NewsItem`] values from its own
//! read-only tree view; nothing is shared or cached across calls.

use crate::feed::{
    extract_channel, extract_item, find_first_child_tag, validate_rss_root, Channel, FeedError,
    NewsItem,
};
use crate::render::{render_console, render_html};
use crate::xml::Element;

/// Converts an RSS 2.0 document tree into console summary lines.
///
/// A channel without a `<title>` is tolerated here (the title line is simply
/// skipped), unlike HTML conversion.
///
/// # Errors
///
/// [`FeedError`] when the root is not an RSS 2.0 document with a `<channel>`
/// child.
pub fn convert_to_console_lines(root: &Element) -> Result<Vec<String>, FeedError> {
    let channel_element = validate_rss_root(root)?;
    let (channel, items) = extract_feed(channel_element);
    Ok(render_console(&channel, &items))
}

/// Converts an RSS 2.0 document tree into an HTML document string.
///
/// # Errors
///
/// [`FeedError`] when the root is not an RSS 2.0 document with a `<channel>`
/// child, or when the channel has no `<title>` element to head the page
/// with.
pub fn convert_to_html(root: &Element) -> Result<String, FeedError> {
    let channel_element = validate_rss_root(root)?;
    if find_first_child_tag(channel_element, "title").is_none() {
        return Err(FeedError::MissingChannelTitle);
    }
    let (channel, items) = extract_feed(channel_element);
    Ok(render_html(&channel, &items))
}

/// Extracts the channel record and every `<item>` child, in document order.
fn extract_feed(channel_element: &Element) -> (Channel, Vec<NewsItem>) {
    let channel = extract_channel(channel_element);
    let items: Vec<NewsItem> = channel_element
        .children()
        .iter()
        .filter(|child| child.is_tag() && child.label() == "item")
        .map(extract_item)
        .collect();
    tracing::debug!(items = items.len(), "Extracted feed");
    (channel, items)
}
