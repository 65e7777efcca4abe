//! RSS 2.0 feed structure: tree queries and channel/item extraction.
//!
//! - [`query`] - Locating named elements among a node's direct children
//! - [`extract`] - Deriving normalized [`Channel`] and [`NewsItem`] records
//!
//! Extraction distinguishes malformed structure from missing content: a root
//! that is not `<rss version="2.0">` with a `<channel>` child is a
//! [`FeedError`], while an item missing a `<title>` or `<link>` simply
//! leaves the field unset.

pub mod extract;
pub mod query;

pub use extract::{extract_channel, extract_item, validate_rss_root, Channel, FeedError, NewsItem};
pub use query::find_first_child_tag;
