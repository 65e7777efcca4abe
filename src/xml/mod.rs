//! Generic labeled document tree and the parser that materializes it.
//!
//! The extraction layer is written against a small capability surface —
//! [`Element::label`], [`Element::is_tag`], [`Element::children`],
//! [`Element::attribute_value`] — so any parser backend producing this shape
//! can be substituted. The bundled backend is an event loop over
//! `quick_xml::Reader`.

mod parser;
mod tree;

pub use parser::{parse_document, XmlError, MAX_XML_DEPTH};
pub use tree::Element;
