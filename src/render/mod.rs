//! Rendering of extracted feed records.
//!
//! Two strategies consume the same `Channel` + ordered `NewsItem` sequence:
//! a plain-text console summary and an HTML document. Renderers produce
//! values (lines, a document string) rather than writing to ambient sinks;
//! the caller owns the output destination. Display defaults for missing
//! fields (`No title available` and friends) live here, not in extraction.

mod console;
mod html;

pub use console::render_console;
pub use html::{escape_html, render_html};
