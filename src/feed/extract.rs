use thiserror::Error;

use crate::feed::query::find_first_child_tag;
use crate::xml::Element;

/// The only RSS version this converter accepts.
pub const RSS_VERSION: &str = "2.0";

/// Structural failures that abort a conversion before any output is produced.
///
/// Missing optional *content* (an item without a title, an empty element) is
/// never an error — those fields stay unset and renderers substitute display
/// defaults. These variants cover malformed *structure* only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// Document root is not an `<rss>` element.
    #[error("root element is <{0}>, expected <rss>")]
    NotRss(String),

    /// Root carries no `version` attribute.
    #[error("<rss> element has no version attribute")]
    MissingVersion,

    /// Root declares a version other than 2.0.
    #[error("unsupported RSS version \"{0}\", expected \"{RSS_VERSION}\"")]
    UnsupportedVersion(String),

    /// Root has no `<channel>` child element.
    #[error("feed has no <channel> element")]
    MissingChannel,

    /// HTML rendering needs a channel `<title>` element and none exists.
    #[error("channel has no <title> element")]
    MissingChannelTitle,
}

/// Feed-level metadata extracted from the `<channel>` element.
///
/// A field is `None` when its element is missing or has no children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Channel {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// One news entry, extracted from an `<item>` element.
///
/// `title` holds the `<title>` text when present, otherwise the
/// `<description>` text, otherwise nothing — never a combination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsItem {
    pub pub_date: Option<String>,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
}

/// Checks that `root` has the RSS 2.0 document shape and returns the
/// `<channel>` element.
///
/// Required shape: a tag node labeled `rss`, a `version` attribute equal to
/// `"2.0"`, and a `<channel>` child element.
pub fn validate_rss_root(root: &Element) -> Result<&Element, FeedError> {
    if !root.is_tag() || root.label() != "rss" {
        return Err(FeedError::NotRss(root.label().to_string()));
    }
    match root.attribute_value("version") {
        None => return Err(FeedError::MissingVersion),
        Some(version) if version != RSS_VERSION => {
            return Err(FeedError::UnsupportedVersion(version.to_string()))
        }
        Some(_) => {}
    }
    let index = find_first_child_tag(root, "channel").ok_or(FeedError::MissingChannel)?;
    Ok(&root.children()[index])
}

/// Extracts channel-level title, link and description.
///
/// Each field takes the text of the located element's first child when that
/// element has at least one child; a missing or empty element leaves the
/// field unset.
pub fn extract_channel(channel: &Element) -> Channel {
    debug_assert!(channel.is_tag() && channel.label() == "channel");

    Channel {
        title: child_tag_text(channel, "title"),
        link: child_tag_text(channel, "link"),
        description: child_tag_text(channel, "description"),
    }
}

/// Extracts one normalized [`NewsItem`] from an `<item>` element.
///
/// A single linear pass over the item's children; for each field the first
/// populated occurrence wins. A child element with zero children contributes
/// nothing — empty feed fields are tolerated, not errors. The `url`
/// attribute of `<source>` is only read when the element also carries text,
/// so an empty `<source url="...">` yields neither name nor URL.
pub fn extract_item(item: &Element) -> NewsItem {
    debug_assert!(item.is_tag() && item.label() == "item");

    let mut extracted = NewsItem::default();
    let mut title = None;
    let mut description = None;

    for child in item.children() {
        if !child.is_tag() || child.children().is_empty() {
            continue;
        }
        match child.label() {
            "pubDate" if extracted.pub_date.is_none() => {
                extracted.pub_date = first_child_text(child);
            }
            "source" if extracted.source_name.is_none() => {
                extracted.source_name = first_child_text(child);
                extracted.source_url = child.attribute_value("url").map(str::to_string);
            }
            "title" if title.is_none() => title = first_child_text(child),
            "description" if description.is_none() => description = first_child_text(child),
            "link" if extracted.link.is_none() => {
                extracted.link = first_child_text(child);
            }
            _ => {}
        }
    }

    extracted.title = title.or(description);
    extracted
}

/// The text of an element's first child, tag or text node alike.
fn first_child_text(element: &Element) -> Option<String> {
    element.children().first().map(|c| c.label().to_string())
}

/// Locates a child tag and takes its first child's text, if any.
fn child_tag_text(parent: &Element, tag_name: &str) -> Option<String> {
    let index = find_first_child_tag(parent, tag_name)?;
    first_child_text(&parent.children()[index])
}
