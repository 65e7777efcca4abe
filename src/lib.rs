//! Convert an RSS 2.0 news feed into a console summary or an HTML page.
//!
//! The conversion is a single linear pipeline:
//!
//! ```text
//! bytes → Element tree → validate → extract Channel/NewsItems → render
//! ```
//!
//! - [`xml`] - Generic labeled document tree and the `quick-xml` backed parser
//! - [`feed`] - Tree queries and RSS 2.0 channel/item extraction
//! - [`render`] - Console-line and HTML rendering of extracted records
//! - [`convert`] - The public pipeline entry points
//! - [`fetch`] - HTTP retrieval of a feed body from a URL
//!
//! Extraction is tolerant of missing *content*: an absent or empty `<title>`,
//! `<link>`, `<pubDate>` or `<source>` leaves the corresponding field unset,
//! and renderers substitute display defaults. Malformed *structure* (a root
//! that is not `<rss version="2.0">` with a `<channel>` child) is a hard
//! error, raised before any output is produced.

pub mod convert;
pub mod feed;
pub mod fetch;
pub mod render;
pub mod xml;
